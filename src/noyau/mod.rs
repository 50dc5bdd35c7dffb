//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie (division par zéro, hors domaine, dépassement…)
//! - format.rs     : lecture de l’affichage + format décimal unique
//! - operations.rs : opérations f64 pures (+ - * / x^y, x!, ln, 1/x, √)
//! - moteur.rs     : état accumulateur + une méthode par bouton
//! - touches.rs    : jetons des boutons + banc d’essai textuel

pub mod erreur;
pub mod format;
pub mod moteur;
pub mod operations;
pub mod touches;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use erreur::{ErreurCalcul, ErreurTouche};
pub use moteur::{Calculatrice, Etat};
pub use operations::Operateur;
pub use touches::Touche;
