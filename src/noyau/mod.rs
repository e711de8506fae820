//! Noyau exact : expressions infixes
//!
//! Organisation interne :
//! - jetons.rs     : classification des caractères (libre, sans état)
//! - crochets.rs   : retrait des paires "()" vides (point fixe itératif)
//! - canon.rs      : normalisation brut -> canonique
//! - grammaire.rs  : validation du brut (booléen)
//! - decimal.rs    : décimal à précision arbitraire
//! - format.rs     : formes texte (scientifique / simple)
//! - reglages.rs   : précision de division, borne d’exposant
//! - evaluateur.rs : deux piles sur la forme canonique
//! - eval.rs       : pipeline complet + démarche
//! - erreur.rs     : erreurs du noyau

pub mod canon;
pub mod crochets;
pub mod decimal;
pub mod erreur;
pub mod eval;
pub mod evaluateur;
pub mod format;
pub mod grammaire;
pub mod jetons;
pub mod reglages;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique
pub use canon::normalize;
pub use decimal::Decimal;
pub use erreur::ErreurCalcul;
pub use eval::{eval_expression, DemarcheNoyau};
pub use evaluateur::{evaluate, evaluate_avec};
pub use grammaire::is_well_formed;
pub use reglages::Reglages;
