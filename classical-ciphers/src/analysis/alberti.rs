use tracing::{debug, error};

use super::{checked_threshold, exhausted, search, ScoredCandidate};
use crate::cipher::Cipher;
use crate::ciphers::{Alberti, AlbertiMode};
use crate::dictionary::Dictionary;
use crate::error::{CipherError, Result};

/// Known parts of the Alberti configuration. Unknown pointers and modes are
/// searched; an unknown inner wheel is assumed to be the default wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbertiParams {
    pub pointer: Option<char>,
    pub in_wheel: Option<String>,
    pub mode: Option<AlbertiMode>,
    pub threshold: f64,
}

impl Default for AlbertiParams {
    fn default() -> Self {
        Self {
            pointer: None,
            in_wheel: None,
            mode: None,
            threshold: 0.8,
        }
    }
}

impl Alberti {
    /// Try every mode (default, simple, periodic) and every outer wheel
    /// symbol as the pointer. The first plausible plaintext wins and the
    /// returned key is the matching cipher configuration. A known pointer or
    /// inner wheel that is not a valid key is an `InvalidParameter` error.
    pub fn cryptanalyze(
        ciphertext: &str,
        dictionary: &Dictionary,
        params: &AlbertiParams,
    ) -> Result<ScoredCandidate<Alberti>> {
        let threshold = checked_threshold(params.threshold);
        let in_wheel = params
            .in_wheel
            .clone()
            .unwrap_or_else(|| Alberti::DEFAULT_KEY.1.to_string());
        let pointer = params.pointer.map_or('a', |pointer| pointer.to_ascii_lowercase());
        if !Alberti::valid_key(pointer, &in_wheel) {
            error!(pointer = ?params.pointer, %in_wheel, "invalid Alberti parameters");
            return Err(CipherError::InvalidParameter(format!(
                "pointer {:?}, inner wheel {in_wheel:?}",
                params.pointer
            )));
        }

        let modes: Vec<AlbertiMode> = match params.mode {
            Some(mode) => vec![mode],
            None => AlbertiMode::ALL.to_vec(),
        };
        let pointers: Vec<char> = match params.pointer {
            Some(pointer) => vec![pointer],
            None => Alberti::OUT_WHEEL.chars().collect(),
        };
        debug!(?modes, ?pointers, threshold, "Alberti cryptanalysis");

        let candidates = modes.into_iter().flat_map(|mode| {
            let in_wheel = in_wheel.clone();
            pointers
                .iter()
                .map(move |&pointer| Alberti::new((pointer, in_wheel.clone()), mode))
        });

        search::first_plausible(candidates, dictionary, threshold, |alberti| {
            alberti.decrypt(ciphertext)
        })
        .ok_or_else(|| exhausted("Alberti"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fixtures::{dictionary, PLAINTEXT};

    #[test]
    fn test_recovers_pointer_and_mode() {
        let wheel = Alberti::DEFAULT_KEY.1.to_string();
        let alberti = Alberti::new(('r', wheel), AlbertiMode::Periodic);
        let ciphertext = alberti.encrypt(PLAINTEXT);

        let found =
            Alberti::cryptanalyze(&ciphertext, &dictionary(), &AlbertiParams::default()).unwrap();
        assert_eq!(found.key, alberti);
        assert_eq!(found.key.mode(), AlbertiMode::Periodic);
        assert_eq!(found.plaintext, PLAINTEXT);
    }

    #[test]
    fn test_known_wheel() {
        let wheel = Alberti::random_wheel();
        let alberti = Alberti::new(('7', wheel.clone()), AlbertiMode::Default);
        let ciphertext = alberti.encrypt(PLAINTEXT);

        let params = AlbertiParams {
            in_wheel: Some(wheel),
            mode: Some(AlbertiMode::Default),
            ..Default::default()
        };
        let found = Alberti::cryptanalyze(&ciphertext, &dictionary(), &params).unwrap();
        assert_eq!(found.plaintext, PLAINTEXT);
    }

    #[test]
    fn test_wrong_pointer_is_exhausted() {
        let wheel = Alberti::DEFAULT_KEY.1.to_string();
        let alberti = Alberti::new(('e', wheel), AlbertiMode::Default);
        let ciphertext = alberti.encrypt(PLAINTEXT);

        let params = AlbertiParams {
            pointer: Some('f'),
            ..Default::default()
        };
        assert!(matches!(
            Alberti::cryptanalyze(&ciphertext, &dictionary(), &params),
            Err(CipherError::CryptanalysisFailed("Alberti"))
        ));
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let ciphertext = Alberti::default().encrypt(PLAINTEXT);

        let params = AlbertiParams {
            in_wheel: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Alberti::cryptanalyze(&ciphertext, &dictionary(), &params),
            Err(CipherError::InvalidParameter(_))
        ));

        let params = AlbertiParams {
            pointer: Some('#'),
            ..Default::default()
        };
        assert!(matches!(
            Alberti::cryptanalyze(&ciphertext, &dictionary(), &params),
            Err(CipherError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_upper_case_pointer_is_accepted() {
        let wheel = Alberti::DEFAULT_KEY.1.to_string();
        let alberti = Alberti::new(('r', wheel), AlbertiMode::Default);
        let ciphertext = alberti.encrypt(PLAINTEXT);

        let params = AlbertiParams {
            pointer: Some('R'),
            mode: Some(AlbertiMode::Default),
            ..Default::default()
        };
        let found = Alberti::cryptanalyze(&ciphertext, &dictionary(), &params).unwrap();
        assert_eq!(found.key, alberti);
        assert_eq!(found.plaintext, PLAINTEXT);
    }
}
