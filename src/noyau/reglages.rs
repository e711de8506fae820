//! Réglages de l’évaluation.
//!
//! Valeurs par défaut : 34 chiffres significatifs pour la division
//! (assez pour les fractions périodiques courantes) et un exposant entier
//! exact borné à 999 999 999.

/// Précision de division par défaut (chiffres significatifs).
pub const PRECISION_DEFAUT: usize = 34;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const PRECISION_MAX: usize = 1000;

/// Plus grand exposant accepté par la puissance entière exacte.
pub const EXPOSANT_MAX_DEFAUT: u32 = 999_999_999;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Chiffres significatifs du quotient (arrondi demi-pair).
    pub precision: usize,
    pub exposant_max: u32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            precision: PRECISION_DEFAUT,
            exposant_max: EXPOSANT_MAX_DEFAUT,
        }
    }
}

impl Reglages {
    /// Précision bornée à [1, PRECISION_MAX].
    pub fn avec_precision(mut self, precision: usize) -> Self {
        self.precision = precision.clamp(1, PRECISION_MAX);
        self
    }

    pub fn avec_exposant_max(mut self, exposant_max: u32) -> Self {
        self.exposant_max = exposant_max;
        self
    }
}
