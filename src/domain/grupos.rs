//! Fixed jogo do bicho group tables
//!
//! Group `g` covers the four dezenas `4g-3 ..= 4g`; dezena 00 counts as 100
//! and therefore belongs to group 25 (Vaca). This mapping is fixed domain
//! data that bet settlement depends on.

/// The 25 canonical animals, indexed by group - 1.
pub const BICHOS: [&str; 25] = [
    "Avestruz",
    "Águia",
    "Burro",
    "Borboleta",
    "Cachorro",
    "Cabra",
    "Carneiro",
    "Camelo",
    "Cobra",
    "Coelho",
    "Cavalo",
    "Elefante",
    "Galo",
    "Gato",
    "Jacaré",
    "Leão",
    "Macaco",
    "Porco",
    "Pavão",
    "Peru",
    "Touro",
    "Tigre",
    "Urso",
    "Veado",
    "Vaca",
];

/// Canonical group for a two-digit dezena string. Unparsable input maps to 0.
pub fn grupo_da_dezena(dezena: &str) -> u32 {
    let Ok(n) = dezena.parse::<u32>() else {
        return 0;
    };
    if n > 99 {
        return 0;
    }
    let n = if n == 0 { 100 } else { n };
    n.div_ceil(4)
}

/// Animal name for a group, if the group is in range.
pub fn bicho_do_grupo(grupo: u32) -> Option<&'static str> {
    if (1..=25).contains(&grupo) {
        Some(BICHOS[(grupo - 1) as usize])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dezena_01_is_avestruz() {
        assert_eq!(grupo_da_dezena("01"), 1);
        assert_eq!(bicho_do_grupo(1), Some("Avestruz"));
    }

    #[test]
    fn dezena_00_wraps_to_vaca() {
        assert_eq!(grupo_da_dezena("00"), 25);
        assert_eq!(bicho_do_grupo(25), Some("Vaca"));
    }

    #[test]
    fn group_boundaries() {
        // each group spans exactly four dezenas
        assert_eq!(grupo_da_dezena("04"), 1);
        assert_eq!(grupo_da_dezena("05"), 2);
        assert_eq!(grupo_da_dezena("96"), 24);
        assert_eq!(grupo_da_dezena("97"), 25);
        assert_eq!(grupo_da_dezena("99"), 25);
    }

    #[test]
    fn unparsable_dezena_maps_to_zero() {
        assert_eq!(grupo_da_dezena("xx"), 0);
        assert_eq!(bicho_do_grupo(0), None);
        assert_eq!(bicho_do_grupo(26), None);
    }
}
