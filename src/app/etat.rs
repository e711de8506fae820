//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur,
//! précision, démarche) et offrir les actions C/CLR/AC sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (le noyau est appelé par vue.rs).
//! - Actions déterministes, sans effet de bord caché.
//! - Précision bornée comme dans le noyau (PRECISION_MAX).
//! - Exposant entier exact borné côté UI (EXPOSANT_MAX_UI) : anti-gel.

use calculatrice_infixe::noyau::reglages::{PRECISION_DEFAUT, PRECISION_MAX};
use calculatrice_infixe::noyau::Reglages;

/// Garde-fou UI : "9^99999999" ne doit pas geler l’interface.
/// Le noyau garde sa borne large (EXPOSANT_MAX_DEFAUT).
pub const EXPOSANT_MAX_UI: u32 = 1000;

/// Démarche affichée (copie des champs texte du noyau).
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub brute: String,
    pub canonique: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,        // forme scientifique si l’exposant l’exige
    pub lecture: String,         // forme décimale simple
    pub erreur: String,          // message d’erreur (si l’évaluation échoue)
    pub resultat_dispo: bool,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub precision: usize, // chiffres significatifs en division

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            resultat_dispo: false,
            demarche: Demarche::default(),
            precision: PRECISION_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + précision par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.precision = PRECISION_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les espaces qui le suivent).
    pub fn supprime_dernier(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        self.focus_entree = true;
    }

    /// Erreur : on garde le dernier résultat affiché, la démarche est coupée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.resultat_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultats(
        &mut self,
        resultat: impl Into<String>,
        lecture: impl Into<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.lecture = lecture.into();
        self.resultat_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Réglages passés au noyau : précision choisie + exposant borné UI.
    pub fn reglages(&self) -> Reglages {
        Reglages::default()
            .avec_precision(self.precision)
            .avec_exposant_max(EXPOSANT_MAX_UI)
    }

    /// Garde-fou : précision dans [1, PRECISION_MAX].
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.clamp(1, PRECISION_MAX);
        self.focus_entree = true;
    }
}
