//! Scénarios “boutons” : séquences de jetons comme au banc d’essai.

use super::Calculatrice;

/// Joue une séquence de jetons et renvoie la calculatrice.
fn jouer(jetons: &[&str]) -> Calculatrice {
    let mut c = Calculatrice::new();
    for j in jetons {
        c.executer_jeton(j)
            .unwrap_or_else(|e| panic!("jeton {j:?} refusé : {e}"));
    }
    c
}

fn affiche(jetons: &[&str]) -> String {
    jouer(jetons).affichage().to_string()
}

#[test]
fn addition_pas_a_pas() {
    let mut c = Calculatrice::new();
    c.executer_jeton("5").unwrap();
    assert_eq!(c.affichage(), "5");
    c.executer_jeton("+").unwrap();
    assert_eq!(c.affichage(), "");
    c.executer_jeton("3").unwrap();
    assert_eq!(c.affichage(), "3");
    c.executer_jeton("=").unwrap();
    assert_eq!(c.affichage(), "8");
}

#[test]
fn quatre_operations() {
    assert_eq!(affiche(&["1", "2", "-", "2", "0", "="]), "-8");
    assert_eq!(affiche(&["6", "*", "7", "="]), "42");
    assert_eq!(affiche(&["1", "0", "/", "4", "="]), "2.5");
    assert_eq!(affiche(&["1", "/", "3", "="]), "0.3333333333333333");
    assert_eq!(affiche(&[".", "1", "+", ".", "2", "="]), "0.30000000000000004");
}

#[test]
fn division_par_zero_affiche_erreur() {
    assert_eq!(affiche(&["7", "/", "0", "="]), "ERROR");
}

#[test]
fn puissances() {
    assert_eq!(affiche(&["2", "**", "1", "0", "="]), "1024");
    assert_eq!(affiche(&["2", "-/+", "**", "3", "="]), "-8");
    assert_eq!(affiche(&["9", "**", ".", "5", "="]), "3");
    assert_eq!(affiche(&["8", "-/+", "**", ".", "5", "="]), "ERROR");
}

#[test]
fn signe_aller_retour() {
    assert_eq!(affiche(&["7", "-/+"]), "-7");
    assert_eq!(affiche(&["7", "-/+", "-/+"]), "7");
    assert_eq!(affiche(&["2", ".", "5", "-/+"]), "-2.5");
}

#[test]
fn factorielle() {
    assert_eq!(affiche(&["1", "1", "x!"]), "ERROR");
    assert_eq!(affiche(&["5", "x!"]), "120");
    assert_eq!(affiche(&["0", "x!"]), "1");
    assert_eq!(affiche(&["1", "0", "x!"]), "3628800");
    assert_eq!(affiche(&["3", "-/+", "x!"]), "ERROR");
}

#[test]
fn fonctions_scientifiques() {
    assert_eq!(affiche(&["2", "sqr"]), "1.4142135623730951");
    assert_eq!(affiche(&["1", "6", "sqr"]), "4");
    assert_eq!(affiche(&["4", "-/+", "sqr"]), "ERROR");

    assert_eq!(affiche(&["1", "log"]), "0");
    assert_eq!(affiche(&["0", "log"]), "ERROR");
    assert_eq!(affiche(&["2", "-/+", "log"]), "ERROR");

    assert_eq!(affiche(&["4", "1/x"]), "0.25");
    assert_eq!(affiche(&["0", "1/x"]), "ERROR");
    assert_eq!(affiche(&[".", "5", "1/x"]), "2");
}

#[test]
fn memoire_aller_retour() {
    let c = jouer(&["MC", "5", "M+", "AC", "3", "M+", "MR"]);
    assert_eq!(c.affichage(), "8");
    assert_eq!(c.memoire(), 8.0);

    assert_eq!(affiche(&["9", "M-", "AC", "MR"]), "-9");
    assert_eq!(affiche(&["9", "M+", "MC", "MR"]), "0");
}

#[test]
fn tout_effacer_idempotent() {
    for prefixe in [&["7", "/", "0", "="][..], &["4", "+"][..], &["2", "M+"][..], &[][..]] {
        let mut seq = prefixe.to_vec();
        seq.push("AC");
        let c1 = jouer(&seq);
        seq.push("AC");
        let c2 = jouer(&seq);
        assert_eq!(c1.affichage(), "0");
        assert_eq!(c2, c1);
    }

    let c = jouer(&["2", "M+", "AC"]);
    assert_eq!(c.memoire(), 2.0);
}

#[test]
fn egal_repete() {
    assert_eq!(affiche(&["5", "+", "3", "=", "="]), "13");
    assert_eq!(affiche(&["2", "*", "3", "=", "=", "="]), "24");
}

#[test]
fn egal_sans_operateur() {
    assert_eq!(affiche(&["5", "="]), "0");
    assert_eq!(affiche(&["7", ".", "5", "="]), "0");
    assert_eq!(affiche(&["5", "=", "+", "2", "="]), "2");
}

#[test]
fn reprise_apres_erreur() {
    assert_eq!(affiche(&["1", "/", "0", "=", "4", "2"]), "42");
    assert_eq!(affiche(&["0", "log", "AC", "6", "x!"]), "720");
}

#[test]
fn resultat_reutilise_comme_operande() {
    assert_eq!(affiche(&["3", "+", "4", "=", "*", "2", "="]), "14");
}
