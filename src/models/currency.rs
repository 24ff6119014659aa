use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Display-only currencies. Order matters: the first entry is the default.
static CURRENCIES: [Currency; 10] = [
    Currency { code: "USD", symbol: "$", name: "US Dollar" },
    Currency { code: "EUR", symbol: "€", name: "Euro" },
    Currency { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    Currency { code: "GBP", symbol: "£", name: "British Pound" },
    Currency { code: "CNY", symbol: "¥", name: "Chinese Yuan" },
    Currency { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    Currency { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    Currency { code: "CHF", symbol: "Fr", name: "Swiss Franc" },
    Currency { code: "HKD", symbol: "HK$", name: "Hong Kong Dollar" },
    Currency { code: "SGD", symbol: "S$", name: "Singapore Dollar" },
];

impl Currency {
    pub fn all() -> &'static [Currency] {
        &CURRENCIES
    }

    pub fn default_ref() -> &'static Currency {
        &CURRENCIES[0]
    }

    /// Exact, case-sensitive lookup by code.
    pub fn find(code: &str) -> Option<&'static Currency> {
        CURRENCIES.iter().find(|c| c.code == code)
    }

    pub fn index(&self) -> usize {
        CURRENCIES
            .iter()
            .position(|c| c.code == self.code)
            .unwrap_or(0)
    }

    /// Step through the list, wrapping at either end.
    pub fn cycle(&self, step: isize) -> &'static Currency {
        let len = CURRENCIES.len() as isize;
        let next = (self.index() as isize + step).rem_euclid(len);
        &CURRENCIES[next as usize]
    }

    pub fn to_record(&self) -> CurrencyRecord {
        CurrencyRecord {
            code: self.code.to_string(),
            symbol: self.symbol.to_string(),
            name: self.name.to_string(),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Serialized form of the active currency, as written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    pub code: String,
    pub symbol: String,
    pub name: String,
}

impl CurrencyRecord {
    /// Resolve back to an enumerated currency. Codes outside the list yield `None`.
    pub fn resolve(&self) -> Option<&'static Currency> {
        Currency::find(&self.code)
    }
}
