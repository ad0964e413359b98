use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in currency symbols. Extended or overridden through the config
/// file's `[currency]` section.
static BUILTIN_SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("PKR", "\u{20A8}"), ("USD", "$")])
});

const DEFAULT_SYMBOL: &str = "$";

/// Currency-code → display-symbol mapping.
///
/// Codes not present in the table fall back to the default symbol.
#[derive(Debug, Clone)]
pub struct CurrencyTable {
    symbols: HashMap<String, String>,
    default_symbol: String,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            symbols: BUILTIN_SYMBOLS
                .iter()
                .map(|(code, symbol)| (code.to_string(), symbol.to_string()))
                .collect(),
            default_symbol: DEFAULT_SYMBOL.to_string(),
        }
    }
}

impl CurrencyTable {
    /// Overlay user-configured entries on top of the built-ins.
    pub fn with_overrides(
        overrides: &HashMap<String, String>,
        default_symbol: Option<&str>,
    ) -> Self {
        let mut table = Self::default();
        for (code, symbol) in overrides {
            table.symbols.insert(code.clone(), symbol.clone());
        }
        if let Some(symbol) = default_symbol {
            table.default_symbol = symbol.to_string();
        }
        table
    }

    pub fn symbol_for(&self, code: Option<&str>) -> &str {
        code.and_then(|c| self.symbols.get(c))
            .map(|s| s.as_str())
            .unwrap_or(&self.default_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pkr_maps_to_rupee_sign() {
        let table = CurrencyTable::default();
        assert_eq!(table.symbol_for(Some("PKR")), "\u{20A8}");
    }

    #[test]
    fn unknown_and_absent_codes_use_the_default() {
        let table = CurrencyTable::default();
        assert_eq!(table.symbol_for(Some("EUR")), "$");
        assert_eq!(table.symbol_for(None), "$");
    }

    #[test]
    fn overrides_take_precedence_over_builtins() {
        let overrides = HashMap::from([
            ("EUR".to_string(), "\u{20AC}".to_string()),
            ("PKR".to_string(), "Rs".to_string()),
        ]);
        let table = CurrencyTable::with_overrides(&overrides, Some("\u{00A4}"));
        assert_eq!(table.symbol_for(Some("EUR")), "\u{20AC}");
        assert_eq!(table.symbol_for(Some("PKR")), "Rs");
        assert_eq!(table.symbol_for(Some("JPY")), "\u{00A4}");
    }
}
