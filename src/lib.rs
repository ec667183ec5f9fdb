//! Procscale – two small in-memory building blocks for sequences of numbers.
//!
//! * A [`container::ThresholdScalingContainer`] is an append-only sequence that,
//!   once it holds more than [`container::SCALING_THRESHOLD`] values, doubles
//!   every positive value it holds after each further push.
//! * A [`pipeline::Processor`] processes batches of integers. The
//!   [`pipeline::DataProcessor`] stores twice every item it sees, while the
//!   [`pipeline::AdvancedProcessor`] announces each batch before handing it to
//!   the data processor it wraps.
//!
//! The two are unrelated apart from the payload they work on.
//!
//! ## Modules
//! * [`container`] – The [`container::Scalable`] trait, its numeric implementations
//!   and the threshold scaling container.
//! * [`pipeline`] – The processor capability, both variants, notifiers and the
//!   [`pipeline::ProcessorType`] selector.
//! * [`sample`] – A plain record type and a couple of free functions used by the
//!   demonstration binary.
//! * [`settings`] – Layered settings for the demonstration binary.
//! * [`error`] – The error type of the settings and driver layer. The container
//!   and the processors themselves never fail.
//!
//! ## Threshold passes
//! Every push that leaves the container with more than ten values triggers a
//! pass over *all* values, so values that were doubled before are doubled again:
//! ```
//! use procscale::container::ThresholdScalingContainer;
//! let mut container: ThresholdScalingContainer<i32> = std::iter::repeat(1).take(11).collect();
//! assert!(container.iter().all(|&v| v == 2));
//! container.push(1);
//! assert!(container.iter().all(|&v| v == 4));
//! ```
//!
//! ## Processors
//! ```
//! use procscale::pipeline::{DataProcessor, Processor};
//! let mut processor = DataProcessor::create_default();
//! processor.process_batch(&[1, 2, 3, 4, 5]);
//! assert_eq!(processor.results(), &[2, 4, 6, 8, 10]);
//! ```
//!
//! ## License
//! Dual licensed under Apache-2.0 and MIT.

pub mod container;
pub mod error;
pub mod pipeline;
pub mod sample;
pub mod settings;
