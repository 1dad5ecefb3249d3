// Title simplification and model-name segmentation.
//
// Listings spell the same product many ways: SD980 IS vs SD980IS, DSC-W310
// vs DSCW310, FUJIFILM vs Fujifilm. Both helpers reduce strings to a form
// where those variants compare equal while suffix variants stay distinct.

/// Lowercases a listing title, drops the characters sellers add or omit
/// inconsistently, and collapses whitespace runs to single spaces.
pub fn simplify(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '+' | '(' | ')'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a model or family name into lowercase tokens, isolating alphabetic
/// and numeric runs. Any non-alphanumeric character is a split point, and a
/// digit run splits from its neighbors even without one, so "DSC-W310S"
/// becomes ["dsc", "w", "310", "s"].
pub fn segment(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();

    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut run_is_digit = false;
    for c in cleaned.chars() {
        let is_digit = c.is_numeric();
        if !run.is_empty() && is_digit != run_is_digit {
            tokens.extend(run.split_whitespace().map(str::to_string));
            run.clear();
        }
        run_is_digit = is_digit;
        run.push(c);
    }
    tokens.extend(run.split_whitespace().map(str::to_string));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_splits_digit_runs_from_letters() {
        assert_eq!(segment("DSC-W310S"), vec!["dsc", "w", "310", "s"]);
    }

    #[test]
    fn segment_splits_on_spaces_and_hyphens() {
        assert_eq!(segment("Alpha DSLR-A390"), vec!["alpha", "dslr", "a", "390"]);
    }

    #[test]
    fn segment_empty_and_symbol_only_input() {
        assert_eq!(segment(""), Vec::<String>::new());
        assert_eq!(segment(" -/# "), Vec::<String>::new());
    }

    #[test]
    fn simplify_drops_noise_and_collapses_spaces() {
        assert_eq!(
            simplify("Sony DSC-W310  (Black) + Case"),
            "sony dscw310 black case"
        );
    }

    #[test]
    fn simplify_trims_edges() {
        assert_eq!(simplify("  Canon IXUS "), "canon ixus");
    }

    #[test]
    fn simplify_is_idempotent() {
        for raw in ["", "  ", "Cyber-shot DSC (new)", "plain title"] {
            let once = simplify(raw);
            assert_eq!(simplify(&once), once);
        }
    }
}
