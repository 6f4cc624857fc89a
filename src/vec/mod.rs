use std::fmt;

use log::{debug, log_enabled, trace, Level};

use crate::{config::Config, error::VecError};

pub const DEFAULT_CAPACITY: usize = 16;
pub const LOAD_FACTOR: f32 = 0.75;

/// Growable vector of owned strings, addressed by index.
///
/// `len` is a high-water mark: one past the highest index ever written, not
/// the number of occupied slots. `set` may leave empty gaps below it.
#[derive(Debug)]
pub struct DynVec {
    items: Box<[Option<String>]>,
    len: usize,
    cap: usize,
    load_factor: f32,
}

impl DynVec {
    pub fn new() -> DynVec {
        DynVec::from_valid_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<DynVec, VecError> {
        config.validate()?;
        Ok(DynVec::from_valid_config(config))
    }

    fn from_valid_config(config: Config) -> DynVec {
        DynVec {
            items: (0..config.initial_capacity).map(|_| None).collect(),
            len: 0,
            cap: config.initial_capacity,
            load_factor: config.load_factor,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn load_factor(&self) -> f32 {
        self.load_factor
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        if index >= self.cap {
            return None;
        }
        self.items[index].as_deref()
    }

    /// Stores a copy of `value` at `index`, growing the backing store first
    /// if needed. On error the vector is left untouched.
    pub fn set(&mut self, index: usize, value: &str) -> Result<(), VecError> {
        let mut owned = String::new();
        owned.try_reserve_exact(value.len())?;
        owned.push_str(value);

        let new_cap = self.grown_capacity(index)?;
        if new_cap != self.cap {
            self.grow(new_cap)?;
        }

        trace!("set index {}", index);
        // slots at or past len are always empty, so this only fires for
        // writes into fresh slots
        if index >= self.len {
            self.len = index + 1;
        }
        self.items[index] = Some(owned);
        Ok(())
    }

    pub fn push(&mut self, value: &str) -> Result<(), VecError> {
        self.set(self.len, value)
    }

    /// Takes the value at `len - 1`. An empty slot there yields `None` and
    /// leaves `len` as it is.
    pub fn pop(&mut self) -> Option<String> {
        if self.len == 0 {
            return None;
        }
        let last = self.len - 1;
        let el = self.items[last].take()?;
        self.len = last;
        trace!("popped index {}", last);
        Some(el)
    }

    /// Releases every stored value and the backing store.
    pub fn destroy(self) {
        if log_enabled!(Level::Debug) {
            let released = self.items.iter().filter(|slot| slot.is_some()).count();
            debug!(
                "destroying vector (size {}, capacity {}), releasing {} values",
                self.len, self.cap, released
            );
        }
        drop(self);
    }

    pub fn print(&self) {
        println!("{}", self);
    }

    fn threshold(&self, cap: usize) -> usize {
        (cap as f32 * self.load_factor) as usize
    }

    // Both growth steps may apply to one call; the result is committed with a
    // single allocation.
    fn grown_capacity(&self, index: usize) -> Result<usize, VecError> {
        let mut cap = self.cap;
        if index >= cap {
            cap = index.checked_add(1).ok_or(VecError::IndexOverflow(index))?;
            debug!("index {} out of range, growing capacity {} -> {}", index, self.cap, cap);
        }
        if self.len >= self.threshold(cap) {
            let doubled = cap.checked_mul(2).ok_or(VecError::CapacityOverflow(cap))?;
            debug!(
                "size {} reached load factor {}, growing capacity {} -> {}",
                self.len, self.load_factor, cap, doubled
            );
            cap = doubled;
        }
        Ok(cap)
    }

    fn grow(&mut self, new_cap: usize) -> Result<(), VecError> {
        let mut items: Vec<Option<String>> = Vec::new();
        items.try_reserve_exact(new_cap)?;
        items.extend(self.items.iter_mut().map(Option::take));
        items.resize_with(new_cap, || None);

        self.items = items.into_boxed_slice();
        self.cap = new_cap;
        Ok(())
    }
}

impl Default for DynVec {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DynVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vector size: {}", self.len)?;
        writeln!(f, "Vector capacity: {}", self.cap)?;
        write!(f, "Vector contents: [")?;
        for (i, slot) in self.items[..self.len].iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", slot.as_deref().unwrap_or("(null)"))?;
        }
        write!(f, "]")
    }
}
