use crate::decoder::config::DecoderConfig;
use crate::decoder::error::Rejection;
use crate::decoder::validate;
use crate::Labels;
use metrics::{Key, Label};
use metrics_util::debugging::DebugValue;
use metrics_util::debugging::DebuggingRecorder;
use metrics_util::CompositeKey;
use metrics_util::MetricKind::Counter;

#[test]
fn should_submit_validation_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let decoder = DecoderConfig::new().build();
        for input in [
            "850234567X",
            "885011234V",
            "199901234567",
            "12345",
            "ABCDEFGHIJ",
            "859344567V",
        ] {
            decoder.validate(input);
        }
    });

    let snapshot = snapshotter.snapshot().into_hashmap();

    let metric_value = snapshot
        .get(&CompositeKey::new(Counter, Key::from_name("nic.validations")))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(6)));

    let accepted = |format: &str| {
        snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_parts("nic.accepted", vec![Label::new("format", format.to_string())]),
            ))
            .expect("metric not found")
    };
    assert_eq!(accepted("legacy"), &(None, None, DebugValue::Counter(2)));
    assert_eq!(accepted("modern"), &(None, None, DebugValue::Counter(1)));

    let rejected = |rejection: Rejection| {
        snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_parts(
                    "nic.rejected",
                    vec![Label::new("reason", rejection.reason())],
                ),
            ))
            .expect("metric not found")
    };
    assert_eq!(
        rejected(Rejection::InvalidLength { length: 5 }),
        &(None, None, DebugValue::Counter(1))
    );
    assert_eq!(
        rejected(Rejection::InvalidCharacter {
            symbol: 'A',
            position: 1
        }),
        &(None, None, DebugValue::Counter(1))
    );
    assert_eq!(
        rejected(Rejection::InvalidDayCount { day_count: 934 }),
        &(None, None, DebugValue::Counter(1))
    );
}

#[test]
fn should_attach_config_labels() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let decoder = DecoderConfig::new()
            .labels(Labels::new(&[("service", "kyc")]))
            .build();
        decoder.validate("850234567X");
        decoder.validate("");
    });

    let snapshot = snapshotter.snapshot().into_hashmap();

    let metric_value = snapshot
        .get(&CompositeKey::new(
            Counter,
            Key::from_parts("nic.validations", vec![Label::new("service", "kyc")]),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(2)));

    let metric_value = snapshot
        .get(&CompositeKey::new(
            Counter,
            Key::from_parts(
                "nic.rejected",
                vec![
                    Label::new("reason", "invalid_length"),
                    Label::new("service", "kyc"),
                ],
            ),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
}

#[test]
fn default_decoder_keeps_its_first_recorder() {
    // registers the default decoder's counters outside of any local recorder
    validate("850234567X");

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    metrics::with_local_recorder(&recorder, || {
        validate("850234567X");
        DecoderConfig::new().build().validate("850234567X");
    });

    let snapshot = snapshotter.snapshot().into_hashmap();
    let metric_value = snapshot
        .get(&CompositeKey::new(Counter, Key::from_name("nic.validations")))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
}
