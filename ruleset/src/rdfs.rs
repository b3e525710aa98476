//! I define the [RDFS entailment patterns](https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment-informative)
//! that can be expressed as [`Rule`]s.
//!
//! `rdfs1` (every datatype IRI is an `rdfs:Datatype`) is not included,
//! as it has no antecedent triple.
use entail_rule::placeholder::PlaceholderName::*;
use entail_rule::Rule;
use lazy_static::lazy_static;
use sophia_api::ns::{rdf, rdfs};

lazy_static! {
    /// `rdfs2`: the subject of a property is in its domain.
    ///
    /// `aaa rdfs:domain xxx` + `uuu aaa yyy` ⇒ `uuu rdf:type xxx`
    pub static ref RDFS2: Rule = Rule::builder()
        .name("rdfs2")
        .antecedent(Aaa.var(), rdfs::domain, Xxx.var())
        .antecedent(Uuu.var(), Aaa.var(), Yyy.var())
        .consequent(Uuu.var(), rdf::type_, Xxx.var())
        .build();

    /// `rdfs3`: the object of a property is in its range.
    ///
    /// `aaa rdfs:range xxx` + `uuu aaa vvv` ⇒ `vvv rdf:type xxx`
    pub static ref RDFS3: Rule = Rule::builder()
        .name("rdfs3")
        .antecedent(Aaa.var(), rdfs::range, Xxx.var())
        .antecedent(Uuu.var(), Aaa.var(), Vvv.var())
        .consequent(Vvv.var(), rdf::type_, Xxx.var())
        .build();

    /// `rdfs4a`: any subject is a resource.
    ///
    /// `uuu aaa xxx` ⇒ `uuu rdf:type rdfs:Resource`
    pub static ref RDFS4A: Rule = Rule::builder()
        .name("rdfs4a")
        .antecedent(Uuu.var(), Aaa.var(), Xxx.var())
        .consequent(Uuu.var(), rdf::type_, rdfs::Resource)
        .build();

    /// `rdfs4b`: any object is a resource.
    ///
    /// `uuu aaa vvv` ⇒ `vvv rdf:type rdfs:Resource`
    pub static ref RDFS4B: Rule = Rule::builder()
        .name("rdfs4b")
        .antecedent(Uuu.var(), Aaa.var(), Vvv.var())
        .consequent(Vvv.var(), rdf::type_, rdfs::Resource)
        .build();

    /// `rdfs5`: `rdfs:subPropertyOf` is transitive.
    ///
    /// `uuu rdfs:subPropertyOf vvv` + `vvv rdfs:subPropertyOf xxx` ⇒ `uuu rdfs:subPropertyOf xxx`
    pub static ref RDFS5: Rule = Rule::builder()
        .name("rdfs5")
        .antecedent(Uuu.var(), rdfs::subPropertyOf, Vvv.var())
        .antecedent(Vvv.var(), rdfs::subPropertyOf, Xxx.var())
        .consequent(Uuu.var(), rdfs::subPropertyOf, Xxx.var())
        .build();

    /// `rdfs6`: `rdfs:subPropertyOf` is reflexive on properties.
    ///
    /// `uuu rdf:type rdf:Property` ⇒ `uuu rdfs:subPropertyOf uuu`
    pub static ref RDFS6: Rule = Rule::builder()
        .name("rdfs6")
        .antecedent(Uuu.var(), rdf::type_, rdf::Property)
        .consequent(Uuu.var(), rdfs::subPropertyOf, Uuu.var())
        .build();

    /// `rdfs7`: a statement holds for the super-properties of its predicate.
    ///
    /// `aaa rdfs:subPropertyOf bbb` + `uuu aaa yyy` ⇒ `uuu bbb yyy`
    pub static ref RDFS7: Rule = Rule::builder()
        .name("rdfs7")
        .antecedent(Aaa.var(), rdfs::subPropertyOf, Bbb.var())
        .antecedent(Uuu.var(), Aaa.var(), Yyy.var())
        .consequent(Uuu.var(), Bbb.var(), Yyy.var())
        .build();

    /// `rdfs8`: every class is a subclass of `rdfs:Resource`.
    ///
    /// `uuu rdf:type rdfs:Class` ⇒ `uuu rdfs:subClassOf rdfs:Resource`
    pub static ref RDFS8: Rule = Rule::builder()
        .name("rdfs8")
        .antecedent(Uuu.var(), rdf::type_, rdfs::Class)
        .consequent(Uuu.var(), rdfs::subClassOf, rdfs::Resource)
        .build();

    /// `rdfs9`: instances of a class are instances of its super-classes.
    ///
    /// `uuu rdfs:subClassOf xxx` + `vvv rdf:type uuu` ⇒ `vvv rdf:type xxx`
    pub static ref RDFS9: Rule = Rule::builder()
        .name("rdfs9")
        .antecedent(Uuu.var(), rdfs::subClassOf, Xxx.var())
        .antecedent(Vvv.var(), rdf::type_, Uuu.var())
        .consequent(Vvv.var(), rdf::type_, Xxx.var())
        .build();

    /// `rdfs10`: `rdfs:subClassOf` is reflexive on classes.
    ///
    /// `uuu rdf:type rdfs:Class` ⇒ `uuu rdfs:subClassOf uuu`
    pub static ref RDFS10: Rule = Rule::builder()
        .name("rdfs10")
        .antecedent(Uuu.var(), rdf::type_, rdfs::Class)
        .consequent(Uuu.var(), rdfs::subClassOf, Uuu.var())
        .build();

    /// `rdfs11`: `rdfs:subClassOf` is transitive.
    ///
    /// `uuu rdfs:subClassOf vvv` + `vvv rdfs:subClassOf xxx` ⇒ `uuu rdfs:subClassOf xxx`
    pub static ref RDFS11: Rule = Rule::builder()
        .name("rdfs11")
        .antecedent(Uuu.var(), rdfs::subClassOf, Vvv.var())
        .antecedent(Vvv.var(), rdfs::subClassOf, Xxx.var())
        .consequent(Uuu.var(), rdfs::subClassOf, Xxx.var())
        .build();

    /// `rdfs12`: container membership properties are sub-properties of `rdfs:member`.
    ///
    /// `uuu rdf:type rdfs:ContainerMembershipProperty` ⇒ `uuu rdfs:subPropertyOf rdfs:member`
    pub static ref RDFS12: Rule = Rule::builder()
        .name("rdfs12")
        .antecedent(Uuu.var(), rdf::type_, rdfs::ContainerMembershipProperty)
        .consequent(Uuu.var(), rdfs::subPropertyOf, rdfs::member)
        .build();

    /// `rdfs13`: every datatype is a subclass of `rdfs:Literal`.
    ///
    /// `uuu rdf:type rdfs:Datatype` ⇒ `uuu rdfs:subClassOf rdfs:Literal`
    pub static ref RDFS13: Rule = Rule::builder()
        .name("rdfs13")
        .antecedent(Uuu.var(), rdf::type_, rdfs::Datatype)
        .consequent(Uuu.var(), rdfs::subClassOf, rdfs::Literal)
        .build();
}
