use procscale::pipeline::{
    ADVANCED_LABEL, ADVANCED_NOTICE, AdvancedProcessor, DEFAULT_LABEL, DataProcessor, Notice,
    Processor, ProcessorType, WriteNotifier,
};

const BATCH: [i32; 5] = [1, 2, 3, 4, 5];

#[test]
fn default_processor_starts_empty() {
    for _ in 0..3 {
        let processor = DataProcessor::create_default();
        assert_eq!(processor.label(), DEFAULT_LABEL);
        assert_eq!(processor.label(), "default");
        assert!(processor.results().is_empty());
    }
}

#[test]
fn base_processor_doubles_each_item() {
    let mut processor = DataProcessor::create_default();
    processor.process_batch(&BATCH);
    assert_eq!(processor.results(), &[2, 4, 6, 8, 10]);
    assert_eq!(processor.results().len(), BATCH.len());
}

#[test]
fn results_accumulate_over_batches() {
    let mut processor = DataProcessor::new("accumulating");
    processor.process_batch(&[1, 2]);
    processor.process_batch(&[]);
    processor.process_item(-4);
    processor.process_batch(&[0, 7]);
    assert_eq!(processor.results(), &[2, 4, -8, 0, 14]);
}

#[test]
fn empty_batch_leaves_results_unchanged() {
    let mut processor = DataProcessor::create_default();
    processor.process_batch(&[3]);
    processor.process_batch(&[]);
    assert_eq!(processor.results(), &[6]);
}

#[test]
fn item_doubling_wraps() {
    let mut processor = DataProcessor::create_default();
    processor.process_batch(&[i32::MAX, i32::MIN]);
    assert_eq!(processor.results(), &[-2, 0]);
}

#[test]
fn advanced_processor_matches_base_results() {
    let mut base = DataProcessor::create_default();
    let mut advanced = AdvancedProcessor::with_notifier(Vec::<Notice>::new());
    base.process_batch(&BATCH);
    advanced.process_batch(&BATCH);
    assert_eq!(advanced.label(), ADVANCED_LABEL);
    assert_eq!(advanced.results(), base.results());
    assert_eq!(advanced.base().results(), &[2, 4, 6, 8, 10]);
}

#[test]
fn advanced_processor_notifies_once_before_results() {
    let mut advanced = AdvancedProcessor::with_notifier(Vec::<Notice>::new());
    advanced.process_batch(&BATCH);
    let notices = advanced.notifier();
    assert_eq!(notices.len(), 1, "exactly one notification per batch");
    assert_eq!(notices[0].message, ADVANCED_NOTICE);
    assert_eq!(notices[0].label, "advanced");
    assert_eq!(notices[0].batch_len, 5);
    assert_eq!(notices[0].results_before, 0, "notified before any result was appended");

    advanced.process_batch(&[6]);
    let notices = advanced.notifier();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[1].results_before, 5);
    assert_eq!(advanced.results().len(), 6);
}

#[test]
fn advanced_processor_notifies_for_empty_batch() {
    let mut advanced = AdvancedProcessor::with_notifier(Vec::<Notice>::new());
    advanced.process_batch(&[]);
    assert_eq!(advanced.notifier().len(), 1);
    assert!(advanced.results().is_empty());
}

#[test]
fn single_items_skip_the_notification() {
    let mut advanced = AdvancedProcessor::with_notifier(Vec::<Notice>::new());
    advanced.process_item(21);
    assert!(advanced.notifier().is_empty());
    assert_eq!(advanced.results(), &[42]);
}

#[test]
fn variants_dispatch_through_trait_objects() {
    let mut processors: Vec<Box<dyn Processor>> = vec![
        Box::new(DataProcessor::create_default()),
        Box::new(AdvancedProcessor::with_notifier(Vec::<Notice>::new())),
    ];
    for processor in processors.iter_mut() {
        processor.process_batch(&BATCH);
    }
    assert_eq!(processors[0].results(), processors[1].results());
    assert_eq!(processors[0].label(), "default");
    assert_eq!(processors[1].label(), "advanced");
}

#[test]
fn processor_type_builds_the_right_variant() {
    let basic = ProcessorType::Basic.build();
    assert_eq!(basic.label(), "default");
    let advanced = ProcessorType::Advanced.build();
    assert_eq!(advanced.label(), "advanced");
    assert_eq!(advanced.stats().name_length, 8);
    let custom = ProcessorType::Custom("custom label".to_string()).build();
    assert_eq!(custom.label(), "custom label");
    assert_eq!(ProcessorType::default(), ProcessorType::Basic);
}

#[test]
fn stats_report_items_and_name_length() {
    let mut processor = DataProcessor::create_default();
    processor.process_batch(&BATCH);
    let stats = processor.stats();
    assert_eq!(stats.total_items, 5);
    assert_eq!(stats.name_length, 7);
    let json = serde_json::to_string(&stats).expect("stats serialize");
    assert_eq!(json, r#"{"total_items":5,"name_length":7}"#);
}

#[test]
fn write_notifier_writes_the_notice_line() {
    let mut advanced = AdvancedProcessor::with_notifier(WriteNotifier::new(Vec::<u8>::new()));
    advanced.process_batch(&BATCH);
    advanced.process_batch(&[]);
    let written = String::from_utf8(advanced.notifier().writer().clone()).expect("utf8");
    assert_eq!(written, "Advanced processing...\nAdvanced processing...\n");
    assert_eq!(advanced.results(), &[2, 4, 6, 8, 10]);
}

// Only the required methods, so process_batch and stats come from the trait.
struct Tally {
    seen: Vec<i32>,
}

impl Processor for Tally {
    fn label(&self) -> &str {
        "tally"
    }
    fn process_item(&mut self, item: i32) {
        self.seen.push(item + 1);
    }
    fn results(&self) -> &[i32] {
        &self.seen
    }
}

#[test]
fn provided_batch_processing_goes_through_process_item() {
    let mut tally = Tally { seen: Vec::new() };
    tally.process_batch(&BATCH);
    tally.process_batch(&[]);
    assert_eq!(tally.results(), &[2, 3, 4, 5, 6]);
    assert_eq!(tally.stats().total_items, 5);
    assert_eq!(tally.stats().name_length, 5);
}
