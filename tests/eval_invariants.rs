//! Property tests for normalization, confusion counting, micro-averaging
//! and pivoting.

use adomain_eval::eval::{count, evaluate};
use adomain_eval::ingest::{pivot, unpivot, FlatPrediction, RecordKey};
use adomain_eval::{normalize, Error, Label, PredictionSet};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

const CLASSES: [&str; 5] = ["Valine", "Leucine", "Tyrosine", "Ornithine", "2,3-DHB"];

/// Ground truth plus a prediction set per record, drawn from a small class pool.
fn dataset() -> impl Strategy<Value = (Vec<Label>, Vec<PredictionSet>)> {
    (1usize..30).prop_flat_map(|n| {
        (
            prop::collection::vec(0..CLASSES.len(), n),
            prop::collection::vec(prop::collection::btree_set(0..CLASSES.len(), 0..3), n),
        )
            .prop_map(|(gt, preds)| {
                let gt: Vec<Label> = gt.into_iter().map(|i| normalize(CLASSES[i])).collect();
                let preds: Vec<PredictionSet> = preds
                    .into_iter()
                    .map(|set| set.into_iter().map(|i| normalize(CLASSES[i])).collect())
                    .collect();
                (gt, preds)
            })
    })
}

proptest! {
    #[test]
    fn test_normalize_idempotent(raw in "[ -~αβγÄöİ\t]{0,30}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn test_normalize_ignores_case_space_and_punctuation(raw in "[a-z0-9]{1,12}") {
        let noisy: String = raw
            .chars()
            .flat_map(|c| [c.to_ascii_uppercase(), ' ', '-'])
            .collect();
        prop_assert_eq!(normalize(&noisy), normalize(&raw));
    }

    #[test]
    fn test_confusion_complete_and_exclusive(
        pairs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..100)
    ) {
        let (truth, pred): (Vec<bool>, Vec<bool>) = pairs.iter().copied().unzip();
        let counts = count(&truth, &pred).unwrap();

        prop_assert_eq!(counts.total(), pairs.len());
        prop_assert_eq!(counts.tp, pairs.iter().filter(|p| **p == (true, true)).count());
        prop_assert_eq!(counts.fp, pairs.iter().filter(|p| **p == (false, true)).count());
        prop_assert_eq!(counts.tn, pairs.iter().filter(|p| **p == (false, false)).count());
        prop_assert_eq!(counts.fn_, pairs.iter().filter(|p| **p == (true, false)).count());
    }

    #[test]
    fn test_per_class_counts_cover_every_record((gt, preds) in dataset()) {
        match evaluate(&gt, &preds) {
            Ok(metrics) => {
                for counts in metrics.per_class.values() {
                    prop_assert_eq!(counts.total(), gt.len());
                }
                prop_assert!((0.0..=1.0).contains(&metrics.precision));
                prop_assert!((0.0..=1.0).contains(&metrics.recall));
                prop_assert!((0.0..=1.0).contains(&metrics.f1));
            }
            Err(e) => prop_assert!(matches!(e, Error::DegenerateMetric(_))),
        }
    }

    #[test]
    fn test_adding_true_label_never_lowers_scores(
        (gt, preds) in dataset(),
        pick in any::<prop::sample::Index>(),
    ) {
        let i = pick.index(gt.len());
        prop_assume!(!preds[i].contains(&gt[i]));
        let Ok(before) = evaluate(&gt, &preds) else {
            return Ok(());
        };

        let mut improved = preds.clone();
        improved[i].insert(gt[i].clone());
        let after = evaluate(&gt, &improved).unwrap();

        prop_assert!(after.recall >= before.recall);
        prop_assert!(after.precision >= before.precision);
        prop_assert_eq!(after.totals.tp, before.totals.tp + 1);
    }

    #[test]
    fn test_adding_wrong_label_never_raises_precision(
        (gt, preds) in dataset(),
        pick in any::<prop::sample::Index>(),
        class in 0..CLASSES.len(),
    ) {
        let i = pick.index(gt.len());
        let wrong = normalize(CLASSES[class]);
        prop_assume!(wrong != gt[i] && !preds[i].contains(&wrong));
        let Ok(before) = evaluate(&gt, &preds) else {
            return Ok(());
        };

        let mut noisier = preds.clone();
        noisier[i].insert(wrong);
        let after = evaluate(&gt, &noisier).unwrap();

        prop_assert!(after.precision <= before.precision);
        prop_assert_eq!(after.recall, before.recall);
    }

    #[test]
    fn test_pivot_preserves_predicted_names(
        entries in prop::collection::vec(
            (0u32..4, 0usize..3, prop::collection::vec("[A-Za-z]{1,6}", 0..4)),
            0..20,
        )
    ) {
        const METHODS: [&str; 3] = ["SANDPUMA", "ASM", "SVM"];
        let flat: Vec<FlatPrediction> = entries
            .into_iter()
            .map(|(module, method, names)| {
                FlatPrediction::new(RecordKey::new("G", "orf1", module), METHODS[method], names)
            })
            .collect();

        let mut expected: BTreeMap<(RecordKey, String), BTreeSet<String>> = BTreeMap::new();
        for entry in &flat {
            expected
                .entry((entry.key.clone(), entry.method.clone()))
                .or_default()
                .extend(entry.names.iter().cloned());
        }

        let table = pivot(&flat);
        let mut actual: BTreeMap<(RecordKey, String), BTreeSet<String>> = BTreeMap::new();
        for entry in unpivot(&table) {
            let names = actual.entry((entry.key, entry.method)).or_default();
            prop_assert!(names.is_empty(), "unpivot repeated a (record, method) pair");
            names.extend(entry.names);
        }

        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn test_all_empty_predictions_are_degenerate() {
    let gt = vec![normalize("Val"), normalize("Leu")];
    let preds = vec![PredictionSet::new(), PredictionSet::new()];
    assert!(matches!(evaluate(&gt, &preds), Err(Error::DegenerateMetric(_))));
}

#[test]
fn test_all_wrong_predictions_score_zero_f1() {
    let gt = vec![normalize("Val"), normalize("Leu")];
    let preds: Vec<PredictionSet> = vec![
        [normalize("Leu")].into_iter().collect(),
        [normalize("Val")].into_iter().collect(),
    ];
    let metrics = evaluate(&gt, &preds).unwrap();
    assert_eq!(metrics.precision, 0.0);
    assert_eq!(metrics.recall, 0.0);
    assert_eq!(metrics.f1, 0.0);
}
