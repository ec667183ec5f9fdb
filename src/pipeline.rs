//! Batch processing of integers behind the [`Processor`] capability.
//!
//! Two variants are provided:
//! * [`DataProcessor`] doubles every item and appends it to its results.
//! * [`AdvancedProcessor`] announces each batch through a [`Notifier`] and then
//!   hands the very same batch to the [`DataProcessor`] it wraps.
//!
//! Both can be used through `Box<dyn Processor>`, which is what
//! [`ProcessorType::build`] returns.

// used to (de)serialize the processor selection and the stats
use serde::{Deserialize, Serialize};

// used by the notifier that writes notices out
use std::io::{self, Stdout, Write};

use tracing::{debug, info};

pub const DEFAULT_LABEL: &str = "default";
pub const ADVANCED_LABEL: &str = "advanced";
pub const ADVANCED_NOTICE: &str = "Advanced processing...";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorStats {
    pub total_items: usize,
    pub name_length: usize,
}

/// The capability shared by every processor variant.
pub trait Processor {
    fn label(&self) -> &str;
    /// Appends twice the item to the results.
    fn process_item(&mut self, item: i32);
    /// Processes the items one by one, in order. An empty batch leaves the
    /// results untouched.
    fn process_batch(&mut self, items: &[i32]) {
        debug!(label = %self.label(), items = items.len(), "processing batch");
        for &item in items {
            self.process_item(item);
        }
    }
    fn results(&self) -> &[i32];
    fn stats(&self) -> ProcessorStats {
        ProcessorStats {
            total_items: self.results().len(),
            name_length: self.label().len(),
        }
    }
}

// ------------- DataProcessor -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataProcessor {
    label: String,
    results: Vec<i32>,
}

impl DataProcessor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            results: Vec::new(),
        }
    }
    pub fn create_default() -> Self {
        Self::new(DEFAULT_LABEL)
    }
}

impl Processor for DataProcessor {
    fn label(&self) -> &str {
        &self.label
    }
    // wraps like two's complement instead of panicking on overflow
    fn process_item(&mut self, item: i32) {
        self.results.push(item.wrapping_mul(2));
    }
    fn results(&self) -> &[i32] {
        &self.results
    }
}

// ------------- Notifier -------------
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub label: String,
    pub message: &'static str,
    pub batch_len: usize,
    // how many results existed when the notice went out
    pub results_before: usize,
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Writes the notice message as a line to any writer.
#[derive(Debug, Clone, Default)]
pub struct WriteNotifier<W: Write> {
    writer: W,
}

impl<W: Write> WriteNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

// A notice that cannot be written is dropped, processing never fails.
impl<W: Write> Notifier for WriteNotifier<W> {
    fn notify(&mut self, notice: &Notice) {
        let _ = writeln!(self.writer, "{}", notice.message);
    }
}

pub type ConsoleNotifier = WriteNotifier<Stdout>;

impl WriteNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

// Keeps every notice, handy when the notifications themselves are of interest.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: &Notice) {
        self.push(notice.clone());
    }
}

// ------------- AdvancedProcessor -------------
#[derive(Debug, Clone)]
pub struct AdvancedProcessor<N: Notifier = ConsoleNotifier> {
    base: DataProcessor,
    notifier: N,
}

impl AdvancedProcessor<ConsoleNotifier> {
    pub fn new() -> Self {
        Self::with_notifier(ConsoleNotifier::stdout())
    }
}

impl Default for AdvancedProcessor<ConsoleNotifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notifier> AdvancedProcessor<N> {
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            base: DataProcessor::new(ADVANCED_LABEL),
            notifier,
        }
    }
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
    pub fn base(&self) -> &DataProcessor {
        &self.base
    }
}

impl<N: Notifier> Processor for AdvancedProcessor<N> {
    fn label(&self) -> &str {
        self.base.label()
    }
    fn process_item(&mut self, item: i32) {
        self.base.process_item(item);
    }
    // notify first, then let the base processor do the actual work
    fn process_batch(&mut self, items: &[i32]) {
        let notice = Notice {
            label: self.base.label().to_owned(),
            message: ADVANCED_NOTICE,
            batch_len: items.len(),
            results_before: self.base.results().len(),
        };
        info!(label = %notice.label, batch_len = notice.batch_len, "{}", notice.message);
        self.notifier.notify(&notice);
        self.base.process_batch(items);
    }
    fn results(&self) -> &[i32] {
        self.base.results()
    }
}

// ------------- ProcessorType -------------
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorType {
    #[default]
    Basic,
    Advanced,
    Custom(String),
}

impl ProcessorType {
    pub fn build(&self) -> Box<dyn Processor> {
        match self {
            ProcessorType::Basic => Box::new(DataProcessor::create_default()),
            ProcessorType::Advanced => Box::new(AdvancedProcessor::new()),
            ProcessorType::Custom(label) => Box::new(DataProcessor::new(label.clone())),
        }
    }
}
