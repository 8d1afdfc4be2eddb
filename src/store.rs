use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::model::{Account, Discount, Reservation, SalesLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Accounts,
    Reservations,
    Discounts,
    Sales,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::Accounts,
        CollectionKind::Reservations,
        CollectionKind::Discounts,
        CollectionKind::Sales,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            CollectionKind::Accounts => "accounts.bin",
            CollectionKind::Reservations => "reservations.bin",
            CollectionKind::Discounts => "discounts.bin",
            CollectionKind::Sales => "sales.bin",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollectionKind::Accounts => "accounts",
            CollectionKind::Reservations => "reservations",
            CollectionKind::Discounts => "discounts",
            CollectionKind::Sales => "sales",
        };
        f.write_str(name)
    }
}

/// A whole collection that is stored as one file. `Default` is what a
/// missing file loads as.
pub trait Collection: Serialize + DeserializeOwned + Default {
    const KIND: CollectionKind;
}

impl Collection for Vec<Account> {
    const KIND: CollectionKind = CollectionKind::Accounts;
}

impl Collection for Vec<Reservation> {
    const KIND: CollectionKind = CollectionKind::Reservations;
}

impl Collection for Vec<Discount> {
    const KIND: CollectionKind = CollectionKind::Discounts;
}

impl Collection for SalesLog {
    const KIND: CollectionKind = CollectionKind::Sales;
}

/// Flat-file storage rooted at one folder. Every save rewrites the full
/// collection in place, so callers load, modify and save back.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Store { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, kind: CollectionKind) -> PathBuf {
        self.root.join(kind.file_name())
    }

    pub fn load<C: Collection>(&self) -> Result<C> {
        let path = self.path_for(C::KIND);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No {} file at {:?}, starting empty", C::KIND, path);
                return Ok(C::default());
            }
            Err(e) => return Err(e.into()),
        };
        // Decoding from a slice bounds every length prefix by the file size.
        let data = bincode::deserialize(&bytes)?;
        debug!("Loaded {} from {:?}", C::KIND, path);
        Ok(data)
    }

    /// Overwrites the backing file with `data`. Not atomic.
    pub fn save<C: Collection>(&self, data: &C) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(C::KIND);
        let mut writer = BufWriter::new(File::create(&path)?);
        bincode::serialize_into(&mut writer, data)?;
        writer.flush()?;
        debug!("Saved {} to {:?}", C::KIND, path);
        Ok(())
    }

    /// Loads a collection, lets `f` change it, and writes it back.
    pub fn update<C, T, F>(&self, f: F) -> Result<T>
    where
        C: Collection,
        F: FnOnce(&mut C) -> Result<T>,
    {
        let mut data = self.load::<C>()?;
        let out = f(&mut data)?;
        self.save(&data)?;
        Ok(out)
    }
}
