//! Built-in providers backed by the `fake` crate

use fake::Fake;
use fake::faker::address::raw::{CityName, CountryName};
use fake::faker::filesystem::raw::{FileExtension, FileName, FilePath};
use fake::faker::internet::raw::{DomainSuffix, FreeEmail, Username};
use fake::faker::lorem::raw::{Sentence, Word, Words};
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::locales::{AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};
use rand::Rng;
use reqgen_domain::Locale;

use super::Provider;

/// Runs a raw `fake` faker with the locale of the calling [`super::Faker`].
macro_rules! localized {
    ($faker:ident($($arg:expr),*) -> $out:ty, $locale:expr, $rng:expr) => {
        match $locale {
            Locale::En => $faker(EN $(, $arg)*).fake_with_rng::<$out, _>($rng),
            Locale::FrFr => $faker(FR_FR $(, $arg)*).fake_with_rng::<$out, _>($rng),
            Locale::PtBr => $faker(PT_BR $(, $arg)*).fake_with_rng::<$out, _>($rng),
            Locale::JaJp => $faker(JA_JP $(, $arg)*).fake_with_rng::<$out, _>($rng),
            Locale::ZhCn => $faker(ZH_CN $(, $arg)*).fake_with_rng::<$out, _>($rng),
            Locale::ZhTw => $faker(ZH_TW $(, $arg)*).fake_with_rng::<$out, _>($rng),
            Locale::ArSa => $faker(AR_SA $(, $arg)*).fake_with_rng::<$out, _>($rng),
        }
    };
}

/// Returns the providers every [`super::Faker`] starts with:
/// `lorem`, `file`, `internet`, `person`, `address` and `misc`.
#[must_use]
pub fn builtin_providers() -> Vec<Provider> {
    vec![lorem(), file(), internet(), person(), address(), misc()]
}

fn lorem() -> Provider {
    Provider::new("lorem")
        .with_function("word", |faker, rng| {
            localized!(Word() -> String, faker.locale(), rng)
        })
        .with_function("words", |faker, rng| {
            localized!(Words(2..5) -> Vec<String>, faker.locale(), rng).join(" ")
        })
        .with_function("sentence", |faker, rng| {
            localized!(Sentence(3..8) -> String, faker.locale(), rng)
        })
}

fn file() -> Provider {
    Provider::new("file")
        .with_function("file_path", |faker, rng| {
            localized!(FilePath() -> String, faker.locale(), rng)
        })
        .with_function("file_name", |faker, rng| {
            localized!(FileName() -> String, faker.locale(), rng)
        })
        .with_function("file_extension", |faker, rng| {
            localized!(FileExtension() -> String, faker.locale(), rng)
        })
}

fn internet() -> Provider {
    Provider::new("internet")
        .with_function("email", |faker, rng| {
            localized!(FreeEmail() -> String, faker.locale(), rng)
        })
        .with_function("user_name", |faker, rng| {
            localized!(Username() -> String, faker.locale(), rng)
        })
        .with_function("domain_suffix", |faker, rng| {
            localized!(DomainSuffix() -> String, faker.locale(), rng)
        })
}

fn person() -> Provider {
    Provider::new("person")
        .with_function("first_name", |faker, rng| {
            localized!(FirstName() -> String, faker.locale(), rng)
        })
        .with_function("last_name", |faker, rng| {
            localized!(LastName() -> String, faker.locale(), rng)
        })
        .with_function("name", |faker, rng| {
            localized!(Name() -> String, faker.locale(), rng)
        })
}

fn address() -> Provider {
    Provider::new("address")
        .with_function("city", |faker, rng| {
            localized!(CityName() -> String, faker.locale(), rng)
        })
        .with_function("country", |faker, rng| {
            localized!(CountryName() -> String, faker.locale(), rng)
        })
}

fn misc() -> Provider {
    Provider::new("misc")
        .with_function("uuid4", |_, rng| {
            uuid::Builder::from_random_bytes(rng.random())
                .into_uuid()
                .hyphenated()
                .to_string()
        })
        .with_function("boolean", |_, rng| rng.random_bool(0.5).to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use reqgen_domain::SymbolRef;

    use super::super::Faker;
    use super::*;

    #[test]
    fn test_every_builtin_function_produces_text() {
        for locale in Locale::all() {
            let faker = Faker::new(*locale, None);
            let mut rng = StdRng::seed_from_u64(5);
            for provider in faker.providers() {
                for function in provider.function_names() {
                    let reference = SymbolRef::new(provider.name(), function);
                    let value = faker.generate(&reference, &mut rng).unwrap();
                    assert!(!value.is_empty(), "{reference} for {locale} is empty");
                }
            }
        }
    }

    #[test]
    fn test_uuid4_is_version_4() {
        let faker = Faker::new(Locale::En, None);
        let mut rng = StdRng::seed_from_u64(9);
        let value = faker
            .generate(&SymbolRef::new("misc", "uuid4"), &mut rng)
            .unwrap();
        let parsed = uuid::Uuid::parse_str(&value).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_builtin_provider_names() {
        let names: Vec<String> = builtin_providers()
            .iter()
            .map(|provider| provider.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["lorem", "file", "internet", "person", "address", "misc"]
        );
    }
}
