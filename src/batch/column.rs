//! Column encodings used inside a compact batch.

use chrono::NaiveDate;
use std::collections::HashMap;

/// Integer column narrowed to the smallest width holding every batch value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntColumn {
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
}

impl IntColumn {
    /// Encode values at the narrowest lossless width. Never promotes to
    /// floating point.
    pub fn from_values(values: Vec<i64>) -> Self {
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);

        if min >= i8::MIN as i64 && max <= i8::MAX as i64 {
            Self::I8(values.into_iter().map(|v| v as i8).collect())
        } else if min >= i16::MIN as i64 && max <= i16::MAX as i64 {
            Self::I16(values.into_iter().map(|v| v as i16).collect())
        } else if min >= i32::MIN as i64 && max <= i32::MAX as i64 {
            Self::I32(values.into_iter().map(|v| v as i32).collect())
        } else {
            Self::I64(values)
        }
    }

    /// Decode the value at `row` back to i64
    pub fn get(&self, row: usize) -> i64 {
        match self {
            Self::I8(v) => v[row] as i64,
            Self::I16(v) => v[row] as i64,
            Self::I32(v) => v[row] as i64,
            Self::I64(v) => v[row],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::I8(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encoded width in bits
    pub fn width_bits(&self) -> u8 {
        match self {
            Self::I8(_) => 8,
            Self::I16(_) => 16,
            Self::I32(_) => 32,
            Self::I64(_) => 64,
        }
    }
}

/// Float column, f32 only when every value survives the round trip exactly
#[derive(Debug, Clone, PartialEq)]
pub enum FloatColumn {
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl FloatColumn {
    pub fn from_values(values: Vec<f64>) -> Self {
        let lossless = values
            .iter()
            .all(|&v| v.is_nan() || (v as f32) as f64 == v);

        if lossless {
            Self::F32(values.into_iter().map(|v| v as f32).collect())
        } else {
            Self::F64(values)
        }
    }

    /// Decode the value at `row` back to f64
    pub fn get(&self, row: usize) -> f64 {
        match self {
            Self::F32(v) => v[row] as f64,
            Self::F64(v) => v[row],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn width_bits(&self) -> u8 {
        match self {
            Self::F32(_) => 32,
            Self::F64(_) => 64,
        }
    }
}

/// Date column with nulls for coerced (unparseable) values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateColumn {
    values: Vec<Option<NaiveDate>>,
}

impl DateColumn {
    pub fn new(values: Vec<Option<NaiveDate>>) -> Self {
        Self { values }
    }

    pub fn get(&self, row: usize) -> Option<NaiveDate> {
        self.values[row]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values that failed to parse and were coerced to null
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }
}

/// Batch-local dictionary encoding of a free-text column.
///
/// Codes are assigned in first-occurrence order and are meaningless outside
/// this batch; no cross-batch dictionary unification happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalColumn {
    codes: Vec<u32>,
    dictionary: Vec<String>,
}

impl CategoricalColumn {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes = Vec::new();
        let mut dictionary: Vec<String> = Vec::new();
        let mut index: HashMap<String, u32> = HashMap::new();

        for value in values {
            let value = value.as_ref();
            let code = match index.get(value) {
                Some(&code) => code,
                None => {
                    let code = dictionary.len() as u32;
                    dictionary.push(value.to_string());
                    index.insert(value.to_string(), code);
                    code
                }
            };
            codes.push(code);
        }

        Self { codes, dictionary }
    }

    /// Dictionary code of the value at `row`
    pub fn code(&self, row: usize) -> u32 {
        self.codes[row]
    }

    /// Original text for a dictionary code
    pub fn value(&self, code: u32) -> &str {
        &self.dictionary[code as usize]
    }

    /// Decoded text at `row`
    pub fn decode(&self, row: usize) -> &str {
        self.value(self.codes[row])
    }

    /// Number of distinct values in this batch
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// A compacted column of any class
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int(IntColumn),
    Float(FloatColumn),
    Date(DateColumn),
    Categorical(CategoricalColumn),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Int(c) => c.len(),
            Self::Float(c) => c.len(),
            Self::Date(c) => c.len(),
            Self::Categorical(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
