//! Calculatrice infixe exacte.
//!
//! Texte brut -> grammaire -> forme canonique -> deux piles -> `Decimal`.
//!
//! ```
//! use calculatrice_infixe::{evaluate, normalize};
//!
//! let canon = normalize("2(3)+-1").unwrap();
//! assert_eq!(canon, "2*(3)-1");
//! assert_eq!(evaluate(&canon).unwrap().to_string(), "5");
//! ```

pub mod noyau;

pub use noyau::{
    eval_expression, evaluate, evaluate_avec, is_well_formed, normalize, Decimal, DemarcheNoyau,
    ErreurCalcul, Reglages,
};
