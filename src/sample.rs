use serde::Serialize;

// used to print out readable forms of a record
use std::fmt;

// ------------- SimpleData -------------
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SimpleData {
    id: i32,
    name: String,
}

impl SimpleData {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
    // Fields are only exposed through getters, which keeps
    // a record immutable once it has been created.
    pub fn id(&self) -> i32 {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SimpleData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.id, self.name)
    }
}

pub fn create_sample_data() -> Vec<SimpleData> {
    vec![
        SimpleData::new(1, "item1"),
        SimpleData::new(2, "item2"),
        SimpleData::new(3, "item3"),
    ]
}

// plain recursion, the call tree grows exponentially with n;
// the result no longer fits a u64 past n = 93
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}
