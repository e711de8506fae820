// src/noyau/jetons.rs
//
// Classification des caractères (fonctions libres, sans état).
// Partagée par la normalisation, la grammaire et l’évaluation.
//
// Trois paires de parenthèses : () {} []
// - grammaire.rs les distingue (type exact via Crochet)
// - canon.rs et evaluateur.rs n’en voient que deux classes (ouvrante / fermante)

/// Parenthèse générique ouvrante (forme canonique).
pub const OUVRANTE: char = '(';
/// Parenthèse générique fermante (forme canonique).
pub const FERMANTE: char = ')';

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_decimal_point(c: char) -> bool {
    c == '.'
}

/// `+ - * / ^`
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

pub fn is_open_bracket(c: char) -> bool {
    matches!(c, '(' | '{' | '[')
}

pub fn is_close_bracket(c: char) -> bool {
    matches!(c, ')' | '}' | ']')
}

/// Type exact d’une paire de parenthèses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crochet {
    Rond,     // ( )
    Accolade, // { }
    Carre,    // [ ]
}

impl Crochet {
    /// Type d’une parenthèse ouvrante, None sinon.
    pub fn ouvrant(c: char) -> Option<Crochet> {
        match c {
            '(' => Some(Crochet::Rond),
            '{' => Some(Crochet::Accolade),
            '[' => Some(Crochet::Carre),
            _ => None,
        }
    }

    /// Type d’une parenthèse fermante, None sinon.
    pub fn fermant(c: char) -> Option<Crochet> {
        match c {
            ')' => Some(Crochet::Rond),
            '}' => Some(Crochet::Accolade),
            ']' => Some(Crochet::Carre),
            _ => None,
        }
    }

    /// Caractère ouvrant de ce type.
    pub fn ouvrante(self) -> char {
        match self {
            Crochet::Rond => '(',
            Crochet::Accolade => '{',
            Crochet::Carre => '[',
        }
    }
}

/// Vrai si `fermant` ferme exactement `ouvrant` : ( ) / { } / [ ].
pub fn brackets_match(ouvrant: char, fermant: char) -> bool {
    match (Crochet::ouvrant(ouvrant), Crochet::fermant(fermant)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Ramène une parenthèse (de n’importe quel type) à sa forme générique.
/// Les autres caractères passent tels quels.
pub fn generique(c: char) -> char {
    if is_open_bracket(c) {
        OUVRANTE
    } else if is_close_bracket(c) {
        FERMANTE
    } else {
        c
    }
}
