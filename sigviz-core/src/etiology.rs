//! Known etiologies for COSMIC SBS signatures.
//!
//! Purely a display annotation: signatures without an entry render with no
//! etiology suffix.

const ETIOLOGIES: &[(&str, &str)] = &[
    ("SBS1", "Clock-like"),
    ("SBS2", "APOBEC"),
    ("SBS3", "HR-deficiency"),
    ("SBS4", "Tobacco"),
    ("SBS5", "Clock-like"),
    ("SBS6", "MMR-deficiency"),
    ("SBS7a", "UV"),
    ("SBS7b", "UV"),
    ("SBS7c", "UV"),
    ("SBS7d", "UV"),
    ("SBS9", "POLH"),
    ("SBS10a", "POLE"),
    ("SBS10b", "POLE"),
    ("SBS11", "Temozolomide"),
    ("SBS13", "APOBEC"),
    ("SBS14", "POLE"),
    ("SBS15", "MMR-deficiency"),
    ("SBS18", "ROS"),
    ("SBS20", "MMR-deficiency"),
    ("SBS21", "MMR-deficiency"),
    ("SBS22", "Aristolochic acid"),
    ("SBS24", "Aflatoxin"),
    ("SBS26", "MMR-deficiency"),
    ("SBS29", "Tobacco"),
    ("SBS30", "NTHL1"),
    ("SBS31", "Platinum-therapy"),
    ("SBS32", "Azathioprine"),
    ("SBS35", "Platinum-therapy"),
    ("SBS36", "MUTYH"),
    ("SBS38", "UV"),
    ("SBS42", "Haloalkanes"),
    ("SBS44", "MMR-deficiency"),
    ("SBS84", "AID"),
    ("SBS85", "AID"),
    ("SBS86", "Chemotherapy"),
    ("SBS87", "Thiopurine"),
    ("SBS88", "E. Coli"),
    ("SBS90", "Duocarmycin"),
];

/// Look up the known etiology for a signature, if any.
pub fn etiology(signature: &str) -> Option<&'static str> {
    ETIOLOGIES
        .iter()
        .find(|(name, _)| *name == signature)
        .map(|(_, cause)| *cause)
}

/// Display label for a signature: the name, suffixed with its etiology when
/// one is known.
pub fn display_label(signature: &str) -> String {
    match etiology(signature) {
        Some(cause) => format!("{} ({})", signature, cause),
        None => signature.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_etiology() {
        assert_eq!(etiology("SBS1"), Some("Clock-like"));
        assert_eq!(etiology("SBS7a"), Some("UV"));
        assert_eq!(etiology("SBS8"), None);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("SBS4"), "SBS4 (Tobacco)");
        assert_eq!(display_label("SBS8"), "SBS8");
    }
}
