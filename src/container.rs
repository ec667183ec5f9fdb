// used to expose the kept values as a plain slice
use std::ops::Deref;
use std::slice::Iter;

// used to print out readable forms of a container
use std::fmt;

use tracing::trace;

/// Once a container holds more than this many values, every push is
/// followed by a threshold pass over all of them.
pub const SCALING_THRESHOLD: usize = 10;

pub trait Scalable: fmt::Debug {
    // static stuff which needs to be implemented downstream
    const NUMERIC_TYPE: &'static str;
    fn is_positive(&self) -> bool;
    fn double(&mut self);
}

// ------------- Numeric Types --------------
// Integers wrap when doubled, so a pass can never overflow into a panic.
macro_rules! scalable_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalable for $t {
                const NUMERIC_TYPE: &'static str = stringify!($t);
                fn is_positive(&self) -> bool {
                    *self > 0
                }
                fn double(&mut self) {
                    *self = self.wrapping_mul(2);
                }
            }
        )*
    };
}
scalable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! scalable_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalable for $t {
                const NUMERIC_TYPE: &'static str = stringify!($t);
                // NaN compares false, so it is never doubled
                fn is_positive(&self) -> bool {
                    *self > 0.0
                }
                fn double(&mut self) {
                    *self *= 2.0;
                }
            }
        )*
    };
}
scalable_float!(f32, f64);

// ------------- ThresholdScalingContainer -------------
#[derive(Clone, PartialEq, Debug)]
pub struct ThresholdScalingContainer<T: Scalable> {
    values: Vec<T>,
}

impl<T: Scalable> ThresholdScalingContainer<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }
    // Every push past the threshold rescans the whole sequence, so values
    // doubled by an earlier pass are doubled again.
    pub fn push(&mut self, item: T) {
        self.values.push(item);
        if self.values.len() > SCALING_THRESHOLD {
            self.scale();
        }
    }
    pub fn size(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
    pub fn iter(&self) -> Iter<'_, T> {
        self.values.iter()
    }
    fn scale(&mut self) {
        let mut doubled = 0usize;
        for value in self.values.iter_mut().filter(|v| v.is_positive()) {
            value.double();
            doubled += 1;
        }
        trace!(len = self.values.len(), doubled, "threshold pass");
    }
}

impl<T: Scalable> Default for ThresholdScalingContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalable> Deref for ThresholdScalingContainer<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.values
    }
}

impl<'a, T: Scalable> IntoIterator for &'a ThresholdScalingContainer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

// Extending goes through push one value at a time, so the
// threshold check still runs after every single append.
impl<T: Scalable> Extend<T> for ThresholdScalingContainer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Scalable> FromIterator<T> for ThresholdScalingContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl<T: Scalable + fmt::Display> fmt::Display for ThresholdScalingContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = String::new();
        for v in self.values.iter() {
            s += &(v.to_string() + ",");
        }
        s.pop();
        write!(f, "[{}]::<{}>", s, T::NUMERIC_TYPE)
    }
}
