//! Unit tests for gr-predict.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use crate::{load_profile_reader, ProfileArtifact};

    /// Two streets, a morning rush on Lê Lợi, a quiet Pasteur.
    pub const PROFILE_CSV: &str = "\
street_name,weekday,hour,los
Lê Lợi,0,7,D
Lê Lợi,0,8,F
Lê Lợi,0,9,C
Lê Lợi,1,8,E
Pasteur,0,7,A
Pasteur,0,period_8_30,B
";

    pub fn artifact() -> ProfileArtifact {
        load_profile_reader(Cursor::new(PROFILE_CSV)).expect("fixture profile loads")
    }
}

// ── Labels ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod los {
    use crate::{Los, PredictError, Severity};

    #[test]
    fn ordered_best_to_worst() {
        assert!(Los::A < Los::B);
        assert!(Los::E < Los::F);
        assert_eq!(Los::ALL.iter().max(), Some(&Los::F));
    }

    #[test]
    fn parse() {
        assert_eq!(" d ".parse::<Los>().unwrap(), Los::D);
        assert_eq!("A".parse::<Los>().unwrap(), Los::A);
        assert!(matches!("G".parse::<Los>(), Err(PredictError::InvalidLabel(s)) if s == "G"));
        assert!("AB".parse::<Los>().is_err());
    }

    #[test]
    fn severity_buckets() {
        let buckets: Vec<_> = Los::ALL.iter().map(|l| l.severity()).collect();
        assert_eq!(
            buckets,
            vec![
                Severity::Clear,
                Severity::Clear,
                Severity::Busy,
                Severity::Busy,
                Severity::Congested,
                Severity::Congested,
            ]
        );
        assert_eq!(Severity::Congested.to_string(), "congested");
    }

    #[test]
    fn clear_is_a_or_b() {
        let clear: Vec<_> = Los::ALL.into_iter().filter(|l| l.is_clear()).collect();
        assert_eq!(clear, vec![Los::A, Los::B]);
    }
}

// ── Vocabulary ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vocabulary {
    use crate::StreetVocabulary;

    #[test]
    fn codes_follow_sorted_names() {
        let v = StreetVocabulary::from_names(["Pasteur", " Hai Bà Trưng", "Cống Quỳnh", "Pasteur", ""]);
        assert_eq!(v.len(), 3);
        let names: Vec<_> = v.iter().collect();
        assert_eq!(names, vec!["Cống Quỳnh", "Hai Bà Trưng", "Pasteur"]);
        assert_eq!(v.code("Cống Quỳnh"), Some(0));
        assert_eq!(v.code("Pasteur "), Some(2));
        assert_eq!(v.name(1), Some("Hai Bà Trưng"));
        assert_eq!(v.name(3), None);
    }

    #[test]
    fn membership() {
        let v = StreetVocabulary::from_names(["Lý Tự Trọng"]);
        assert!(v.contains("Lý Tự Trọng"));
        assert!(!v.contains("Lý Thái Tổ"));
        assert!(StreetVocabulary::default().is_empty());
    }
}

// ── Profile artifact ──────────────────────────────────────────────────────────

#[cfg(test)]
mod profile {
    use std::io::Cursor;

    use gr_core::TimeSlot;

    use crate::{
        load_profile_csv, load_profile_reader, CongestionModel, Los, PredictError,
        PredictionFeatures,
    };

    fn slot(hour: u32, weekday: u32) -> TimeSlot {
        TimeSlot::new(hour, weekday).unwrap()
    }

    #[test]
    fn vocabulary_from_rows() {
        let a = super::helpers::artifact();
        assert_eq!(a.vocabulary.len(), 2);
        assert_eq!(a.model.len(), 6);
    }

    #[test]
    fn exact_slot() {
        let a = super::helpers::artifact();
        let le_loi = a.vocabulary.code("Lê Lợi").unwrap();
        let f = PredictionFeatures::new(slot(8, 0), le_loi);
        assert_eq!(a.model.predict(f).unwrap(), Los::F);
    }

    #[test]
    fn period_hour_form() {
        let a = super::helpers::artifact();
        let pasteur = a.vocabulary.code("Pasteur").unwrap();
        assert_eq!(a.model.predict(PredictionFeatures::new(slot(8, 0), pasteur)).unwrap(), Los::B);
    }

    #[test]
    fn missing_slot_uses_street_median() {
        let a = super::helpers::artifact();
        let le_loi = a.vocabulary.code("Lê Lợi").unwrap();
        // Observed C, D, E, F → lower median D.
        let f = PredictionFeatures::new(slot(3, 5), le_loi);
        assert_eq!(a.model.predict(f).unwrap(), Los::D);
    }

    #[test]
    fn unknown_code_is_error() {
        let a = super::helpers::artifact();
        let f = PredictionFeatures { hour: 8, weekday: 0, street_code: 99 };
        assert!(matches!(a.model.predict(f), Err(PredictError::UnknownStreetCode(99))));
    }

    #[test]
    fn fallback_is_configurable() {
        let a = super::helpers::artifact();
        // Fallback only applies when a street has no observations at all,
        // which cannot happen for artifact-derived codes; the default itself
        // is observable through an empty artifact.
        let empty = load_profile_reader(Cursor::new("street_name,weekday,hour,los\n")).unwrap();
        assert!(empty.model.is_empty());
        assert!(empty.vocabulary.is_empty());
        let model = a.model.with_fallback(Los::A);
        assert_eq!(model.len(), 6);
    }

    #[test]
    fn training_header_spellings() {
        let csv = "street_name,weekday,period,LOS\nNam Kỳ Khởi Nghĩa,2,period_17_00,E\n";
        let a = load_profile_reader(Cursor::new(csv)).unwrap();
        let code = a.vocabulary.code("Nam Kỳ Khởi Nghĩa").unwrap();
        assert_eq!(a.model.predict(PredictionFeatures::new(slot(17, 2), code)).unwrap(), Los::E);
    }

    #[test]
    fn duplicate_slot_rejected() {
        let csv = "street_name,weekday,hour,los\nPasteur,0,7,A\nPasteur ,0,period_7_45,B\n";
        match load_profile_reader(Cursor::new(csv)) {
            Err(PredictError::Parse(msg)) => assert!(msg.contains("duplicate slot"), "{msg}"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn bad_label_and_hour_rejected() {
        let bad_label = "street_name,weekday,hour,los\nPasteur,0,7,Z\n";
        assert!(matches!(
            load_profile_reader(Cursor::new(bad_label)),
            Err(PredictError::Parse(msg)) if msg.starts_with("line 2")
        ));
        let bad_hour = "street_name,weekday,hour,los\nPasteur,0,period_25_00,A\n";
        assert!(load_profile_reader(Cursor::new(bad_hour)).is_err());
        let bad_day = "street_name,weekday,hour,los\nPasteur,7,7,A\n";
        assert!(load_profile_reader(Cursor::new(bad_day)).is_err());
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("profile.csv");
        std::fs::write(&path, super::helpers::PROFILE_CSV).unwrap();
        let a = load_profile_csv(&path).unwrap();
        assert_eq!(a.vocabulary.len(), 2);
    }
}

// ── Predictor ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod predictor {
    use gr_core::TimeSlot;

    use crate::{
        CongestionModel, Los, PredictError, PredictResult, PredictionFeatures, Predictor,
        StreetVocabulary,
    };

    /// Deterministic model covering every label: a hash of the features.
    struct Mixing;

    impl CongestionModel for Mixing {
        fn predict(&self, f: PredictionFeatures) -> PredictResult<Los> {
            let h = (f.hour as usize * 7 + f.weekday as usize * 3 + f.street_code as usize * 5) % 6;
            Ok(Los::ALL[h])
        }
    }

    /// Model with a buggy batch override that drops the last row.
    struct Truncating;

    impl CongestionModel for Truncating {
        fn predict(&self, _: PredictionFeatures) -> PredictResult<Los> {
            Ok(Los::A)
        }
        fn predict_batch(&self, f: &[PredictionFeatures]) -> PredictResult<Vec<Los>> {
            Ok(vec![Los::A; f.len().saturating_sub(1)])
        }
    }

    /// Model that fails on one street code.
    struct FailsOn(u32);

    impl CongestionModel for FailsOn {
        fn predict(&self, f: PredictionFeatures) -> PredictResult<Los> {
            if f.street_code == self.0 {
                Err(PredictError::Model("no tree for street".into()))
            } else {
                Ok(Los::B)
            }
        }
    }

    fn streets() -> Vec<&'static str> {
        vec!["Điện Biên Phủ", "Lê Duẩn", "Nguyễn Thị Minh Khai", "Võ Văn Tần"]
    }

    fn predictor<M: CongestionModel + 'static>(m: M) -> Predictor {
        Predictor::new(StreetVocabulary::from_names(streets()), m)
    }

    #[test]
    fn batch_matches_elementwise() {
        let p = predictor(Mixing);
        let mut queries = Vec::new();
        for weekday in 0..7 {
            for hour in 0..24 {
                for s in streets() {
                    queries.push((TimeSlot::new(hour, weekday).unwrap(), s));
                }
            }
        }
        let batch = p.predict_batch(&queries).unwrap();
        let single: Vec<_> = queries.iter().map(|(t, s)| p.predict(*t, s).unwrap()).collect();
        assert_eq!(batch, single);
    }

    #[test]
    fn empty_batch() {
        let p = predictor(Mixing);
        let none: [(TimeSlot, &str); 0] = [];
        assert!(p.predict_batch(&none).unwrap().is_empty());
    }

    #[test]
    fn unknown_street() {
        let p = predictor(Mixing);
        let t = TimeSlot::new(8, 0).unwrap();
        assert!(matches!(p.predict(t, "Nowhere"), Err(PredictError::UnknownStreet(s)) if s == "Nowhere"));
        assert!(p.predict_batch(&[(t, "Lê Duẩn"), (t, "Nowhere")]).is_err());
        assert!(!p.knows("Nowhere"));
        assert!(p.knows(" Lê Duẩn"));
    }

    #[test]
    fn batch_length_is_checked() {
        let p = predictor(Truncating);
        let t = TimeSlot::new(8, 0).unwrap();
        assert!(matches!(
            p.predict_batch(&[(t, "Lê Duẩn"), (t, "Võ Văn Tần")]),
            Err(PredictError::BatchLength { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn model_failure_fails_batch() {
        let vocab = StreetVocabulary::from_names(streets());
        let bad = vocab.code("Lê Duẩn").unwrap();
        let p = Predictor::new(vocab, FailsOn(bad));
        let t = TimeSlot::new(8, 0).unwrap();
        assert_eq!(p.predict(t, "Võ Văn Tần").unwrap(), Los::B);
        assert!(matches!(p.predict(t, "Lê Duẩn"), Err(PredictError::Model(_))));
        assert!(p.predict_batch(&[(t, "Võ Văn Tần"), (t, "Lê Duẩn")]).is_err());
    }

    #[test]
    fn from_artifact() {
        let p = Predictor::from_artifact(super::helpers::artifact());
        let t = TimeSlot::new(7, 0).unwrap();
        assert_eq!(p.predict(t, "Lê Lợi").unwrap(), Los::D);
        assert_eq!(p.predict(t, "Pasteur").unwrap(), Los::A);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_batch_preserves_order() {
        let p = predictor(Mixing);
        let queries: Vec<_> = (0..10_000u32)
            .map(|i| (TimeSlot::new(i % 24, (i / 24) % 7).unwrap(), streets()[i as usize % 4]))
            .collect();
        let batch = p.predict_batch(&queries).unwrap();
        let single: Vec<_> = queries.iter().map(|(t, s)| p.predict(*t, s).unwrap()).collect();
        assert_eq!(batch, single);
    }
}
