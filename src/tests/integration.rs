#[cfg(test)]
mod integration_tests {

    use crate::{EngineConfig, Method, NameRequest, Transliterator};

    fn service() -> Transliterator {
        Transliterator::new()
    }

    #[test]
    fn scenario_arabic_exact_dictionary() {
        let result = service()
            .transliterate(&NameRequest::new("محمد", "علي", "EG"))
            .unwrap();
        assert_eq!(result.first_name.text, "Mohammed");
        assert_eq!(result.last_name.text, "Ali");
        assert_eq!(result.method, Method::ExactDictionaryMatch);
        assert!(result.overall_accuracy >= 0.95);
    }

    #[test]
    fn scenario_japanese_macron_output() {
        let result = service()
            .transliterate(&NameRequest::new("太郎", "山田", "JP"))
            .unwrap();
        assert!(
            result.first_name.text == "Tarō" || result.first_name.text == "Tarou",
            "got {}",
            result.first_name.text
        );
        assert_eq!(result.last_name.text, "Yamada");
        assert!(result.overall_accuracy >= 0.85);
    }

    #[test]
    fn scenario_korean_surname_and_romanized_given() {
        let result = service()
            .transliterate(&NameRequest::new("민수", "김", "KR"))
            .unwrap();
        assert_eq!(result.first_name.text, "Minsu");
        assert_eq!(result.last_name.text, "Kim");
        assert!(result.overall_accuracy >= 0.85);
    }

    #[test]
    fn scenario_latin_diacritic_normalization() {
        let result = service()
            .transliterate(&NameRequest::new("José", "García", "ES"))
            .unwrap();
        assert_eq!(result.first_name.text, "Jose");
        assert_eq!(result.last_name.text, "Garcia");
        assert_eq!(result.method, Method::DiacriticNormalization);
        assert!(result.overall_accuracy >= 0.95);
    }

    #[test]
    fn scenario_clean_latin_passthrough() {
        let result = service()
            .transliterate(&NameRequest::new("Xyz", "Abc", "ZZ"))
            .unwrap();
        assert_eq!(result.first_name.text, "Xyz");
        assert_eq!(result.last_name.text, "Abc");
        assert_eq!(result.method, Method::LatinPassthrough);
    }

    #[test]
    fn normalized_japanese_request() {
        let mut request = NameRequest::new("太郎", "佐藤", "JP");
        request.normalized = true;
        let result = service().transliterate(&request).unwrap();
        assert_eq!(result.first_name.text, "Taro");
        assert_eq!(result.last_name.text, "Sato");
    }

    #[test]
    fn dictionary_precedence_over_libraries() {
        // Every exact dictionary hit must outrank whatever the library
        // tier would have produced.
        let cases = [
            ("محمد", "علي", "EG"),
            ("太郎", "山田", "JP"),
            ("지우", "박", "KR"),
        ];
        let t = service();
        for (first, last, country) in cases {
            let result = t
                .transliterate(&NameRequest::new(first, last, country))
                .unwrap();
            assert_eq!(result.first_name.method, Method::ExactDictionaryMatch);
            assert!(result.first_name.accuracy >= 0.95);
            assert_eq!(result.last_name.method, Method::ExactDictionaryMatch);
        }
    }

    #[test]
    fn fallback_guarantee_with_all_engines_disabled() {
        let t = Transliterator::builder()
            .engines(EngineConfig {
                japanese: false,
                korean: false,
                chinese: false,
                arabic: false,
            })
            .build();
        // Names chosen to miss every dictionary, forcing the degraded
        // tiers end to end.
        let cases = [
            ("شمس", "EG"),
            ("민서", "KR"),
            ("光", "CN"),
            ("ひかり", "JP"),
        ];
        for (first, country) in cases {
            let result = t
                .transliterate(&NameRequest::new(first, "", country))
                .unwrap();
            assert!(
                !result.first_name.text.is_empty(),
                "{first} produced empty text"
            );
            assert!(result.first_name.accuracy < 0.85);
            assert!(result.first_name.accuracy >= 0.1);
        }
    }

    #[test]
    fn purity_identical_input_identical_output() {
        let t = service();
        let request = NameRequest::new("Παπαδόπουλος", "Γιώργος", "GR");
        let a = t.transliterate(&request).unwrap();
        let b = t.transliterate(&request).unwrap();
        assert_eq!(a.first_name, b.first_name);
        assert_eq!(a.last_name, b.last_name);
        assert_eq!(a.overall_accuracy, b.overall_accuracy);
    }

    #[test]
    fn ascii_latin_idempotence() {
        let t = service();
        let once = t
            .transliterate(&NameRequest::new("John", "Smith", "US"))
            .unwrap();
        assert_eq!(once.first_name.text, "John");
        assert_eq!(once.last_name.text, "Smith");
        let twice = t
            .transliterate(&NameRequest::new(
                &once.first_name.text,
                &once.last_name.text,
                "US",
            ))
            .unwrap();
        assert_eq!(twice.first_name.text, once.first_name.text);
        assert_eq!(twice.last_name.text, once.last_name.text);
    }

    #[test]
    fn result_envelope_serializes_with_camel_case_and_methods() {
        let result = service()
            .transliterate(&NameRequest::new("Иван", "Иванов", "RU"))
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"firstName\""));
        assert!(json.contains("\"overallAccuracy\""));
        assert!(json.contains("\"character_map\""));
        assert_eq!(result.first_name.text, "Ivan");
        assert_eq!(result.last_name.text, "Ivanov");
    }

    #[test]
    fn cross_script_fields_route_independently() {
        // A Cyrillic first name and a Latin last name under one request.
        let result = service()
            .transliterate(&NameRequest::new("Наталья", "Smith", "ZZ"))
            .unwrap();
        assert_eq!(result.first_name.text, "Natalya");
        assert_eq!(result.first_name.method, Method::CharacterMap);
        assert_eq!(result.last_name.text, "Smith");
        assert_eq!(result.last_name.method, Method::LatinPassthrough);
    }

    #[test]
    fn thai_and_devanagari_route_by_country() {
        let t = service();
        let thai = t
            .transliterate(&NameRequest::new("สมชาย", "", "TH"))
            .unwrap();
        assert_eq!(thai.first_name.method, Method::CharacterMap);
        assert_eq!(thai.first_name.accuracy, 0.7);
        assert!(thai.first_name.text.is_ascii());

        let hindi = t
            .transliterate(&NameRequest::new("राहुल", "", "IN"))
            .unwrap();
        assert_eq!(hindi.first_name.method, Method::CharacterMap);
        assert_eq!(hindi.first_name.accuracy, 0.8);
        assert!(hindi.first_name.text.is_ascii());
    }

    #[test]
    fn service_is_shared_across_threads_without_locking() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transliterator>();

        let t = std::sync::Arc::new(service());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let t = t.clone();
                std::thread::spawn(move || {
                    t.transliterate(&NameRequest::new("محمد", "علي", "EG"))
                        .unwrap()
                        .first_name
                        .text
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Mohammed");
        }
    }

    #[test]
    fn mismatched_country_and_script_still_resolves() {
        // Greek name tagged as Japanese: the JP strategy rejects, script
        // detection finds Greek.
        let result = service()
            .transliterate(&NameRequest::new("Γιώργος", "", "JP"))
            .unwrap();
        assert_eq!(result.first_name.text, "Giorgos");
        assert_eq!(result.first_name.method, Method::CharacterMap);
    }
}
