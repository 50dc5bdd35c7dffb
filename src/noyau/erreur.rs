//! Taxonomie des erreurs du noyau.
//!
//! Aucune de ces erreurs ne sort des boutons : le moteur les attrape et
//! affiche la sentinelle `ERROR` (ou ignore la touche si l’affichage est illisible).

use thiserror::Error;

/// Échec d’un calcul (ou d’une lecture de l’affichage).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Division ou inverse de zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// Argument hors du domaine de l’opération (log, racine, puissance, factorielle).
    #[error("hors domaine : {0}")]
    HorsDomaine(&'static str),

    /// Résultat non fini (infini ou NaN).
    #[error("dépassement : résultat non fini")]
    Depassement,

    /// L’affichage ne contient pas un nombre.
    #[error("affichage illisible : {0:?}")]
    AffichageIllisible(String),
}

/// Erreur du banc d’essai textuel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurTouche {
    #[error("entrée invalide : {0}")]
    Inconnue(String),
}
