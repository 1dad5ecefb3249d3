// Catalog indexing: token extraction and compiled match patterns.
use crate::model::Product;
use crate::normalizer::segment;
use regex::Regex;

/// A catalog product with its derived matching metadata, computed once at
/// load time so the per-listing scan does no string rework.
#[derive(Debug, Clone)]
pub struct IndexedProduct {
    pub product: Product,
    pub manufacturer_norm: String,
    pub name_tokens: Vec<String>,
    pub pattern: Regex,
}

/// Indexes the catalog in its given order. Missing family names just
/// contribute no tokens.
pub fn index_catalog(catalog: Vec<Product>) -> Vec<IndexedProduct> {
    catalog
        .into_iter()
        .map(|product| {
            let manufacturer_norm = product.manufacturer.to_lowercase();
            let mut name_tokens = vec![manufacturer_norm.clone()];
            if let Some(family) = &product.family {
                name_tokens.extend(segment(family));
            }
            name_tokens.extend(segment(&product.model));
            let pattern = compile_pattern(&name_tokens);
            IndexedProduct {
                product,
                manufacturer_norm,
                name_tokens,
                pattern,
            }
        })
        .collect()
}

/// Builds the search pattern for a token sequence: each token may be
/// followed by at most one separator character, and the final token must be
/// followed by a non-alphanumeric boundary. The boundary is what keeps a
/// pattern for W310 from matching inside W310S.
fn compile_pattern(tokens: &[String]) -> Regex {
    let mut pattern = String::new();
    for token in tokens {
        pattern.push_str(&regex::escape(token));
        pattern.push_str(r"\W?");
    }
    pattern.push_str(r"\W");
    Regex::new(&pattern).expect("escaped tokens always form a valid pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(manufacturer: &str, family: Option<&str>, model: &str) -> Product {
        Product {
            product_name: format!("{manufacturer}_{model}"),
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            family: family.map(str::to_string),
        }
    }

    #[test]
    fn tokens_cover_manufacturer_family_and_model() {
        let indexed = index_catalog(vec![product("Sony", Some("Cyber-shot"), "DSC-W310")]);
        assert_eq!(
            indexed[0].name_tokens,
            vec!["sony", "cyber", "shot", "dsc", "w", "310"]
        );
        assert_eq!(indexed[0].manufacturer_norm, "sony");
    }

    #[test]
    fn missing_family_yields_fewer_tokens() {
        let indexed = index_catalog(vec![product("Sony", None, "DSC-W310")]);
        assert_eq!(indexed[0].name_tokens, vec!["sony", "dsc", "w", "310"]);
    }

    #[test]
    fn pattern_is_searchable_inside_longer_titles() {
        let indexed = index_catalog(vec![product("Sony", None, "DSC-W310")]);
        assert!(indexed[0].pattern.is_match("great deal sony dscw310 camera"));
        assert!(indexed[0].pattern.is_match("sony dsc w310 silver"));
    }

    #[test]
    fn pattern_tolerates_at_most_one_separator_between_tokens() {
        let indexed = index_catalog(vec![product("Sony", None, "DSC-W310")]);
        assert!(!indexed[0].pattern.is_match("sony dsc  w310 silver"));
    }

    #[test]
    fn pattern_requires_trailing_boundary() {
        let indexed = index_catalog(vec![product("Sony", None, "DSC-W310")]);
        // Suffix variants are different products, a title ending right at
        // the model number has no boundary character to match.
        assert!(!indexed[0].pattern.is_match("sony dscw310s camera"));
        assert!(!indexed[0].pattern.is_match("sony dscw310"));
    }

    #[test]
    fn indexing_is_deterministic() {
        let catalog = vec![
            product("Sony", Some("Cyber-shot"), "DSC-W310"),
            product("Canon", None, "SD980 IS"),
        ];
        let a = index_catalog(catalog.clone());
        let b = index_catalog(catalog);
        let tokens = |v: &[IndexedProduct]| {
            v.iter().map(|p| p.name_tokens.clone()).collect::<Vec<_>>()
        };
        assert_eq!(tokens(&a), tokens(&b));
        let patterns = |v: &[IndexedProduct]| {
            v.iter().map(|p| p.pattern.as_str().to_string()).collect::<Vec<_>>()
        };
        assert_eq!(patterns(&a), patterns(&b));
    }
}
