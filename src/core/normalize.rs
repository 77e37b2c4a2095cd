use crate::domain::model::{CountrySummary, CurrencyDescriptor, NOT_AVAILABLE};
use crate::domain::upstream::RawCountry;

/// Turns a provider country record, or its absence, into a fully populated summary.
///
/// When a country has several currencies, the first key of the mapping wins. The
/// provider makes no ordering promise, so for multi-currency countries the choice is
/// only as stable as the map's iteration order (lexicographic for `BTreeMap`).
pub fn normalize_country(country: Option<&RawCountry>) -> CountrySummary {
    let Some(country) = country else {
        return CountrySummary::unavailable();
    };

    let name = country
        .name
        .as_ref()
        .and_then(|n| non_empty(n.common.as_deref()))
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    let capital = country
        .capital
        .as_ref()
        .and_then(|c| c.first())
        .map(String::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    let languages: Vec<String> = country
        .languages
        .as_ref()
        .map(|l| l.values().cloned().collect())
        .unwrap_or_default();

    let currency = country
        .currencies
        .as_ref()
        .and_then(|c| c.iter().next())
        .map(|(code, info)| CurrencyDescriptor {
            code: code.clone(),
            name: non_empty(info.name.as_deref())
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            symbol: info.symbol.clone().unwrap_or_default(),
        })
        .unwrap_or_else(CurrencyDescriptor::unavailable);

    let flag = country
        .flags
        .as_ref()
        .and_then(|f| non_empty(f.svg.as_deref()).or(non_empty(f.png.as_deref())))
        .unwrap_or_default()
        .to_string();

    CountrySummary {
        name,
        capital,
        languages,
        currency,
        flag,
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
