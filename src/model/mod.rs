pub mod descriptor;
pub mod label;
pub mod ontology;
