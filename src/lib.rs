//! Calculatrice scientifique : noyau réutilisable par n’importe quelle UI.
//!
//! L’UI (eframe) et le banc d’essai textuel vivent dans le binaire.

pub mod noyau;
