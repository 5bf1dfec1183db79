use crate::artifacts::core::error::{RepositoryError, RepositoryResult};
use crate::artifacts::core::lookup::ObjectLookup;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Decompressed object body together with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    pub object_type: ObjectType,
    pub content: Bytes,
}

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Frame, hash, compress and persist `content` as an object of `object_type`.
    ///
    /// Storing identical content again yields the same ID and leaves the
    /// existing file untouched.
    pub fn store(&self, content: &[u8], object_type: ObjectType) -> RepositoryResult<ObjectId> {
        if content.is_empty() {
            tracing::error!(%object_type, "refusing to hash empty content");
            return Err(RepositoryError::EmptyContent);
        }

        let framed = object_type.frame(content);
        let object_id = ObjectId::hash_framed(&framed);
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(&object_path, &framed)?;
            tracing::debug!(%object_type, oid = %object_id, "stored object");
        }

        Ok(object_id)
    }

    pub fn store_object(&self, object: &impl Object) -> RepositoryResult<ObjectId> {
        self.store(&object.serialize()?, object.object_type())
    }

    /// Load an object body by ID.
    ///
    /// A missing file is `NotFound`; a file that cannot be decompressed or whose
    /// header is malformed is `Corrupt`. Other I/O failures are errors.
    pub fn read(&self, object_id: &ObjectId) -> RepositoryResult<ObjectLookup<RawObject>> {
        let object_path = self.path.join(object_id.to_path());

        let compressed = match std::fs::read(&object_path) {
            Ok(compressed) => compressed,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(oid = %object_id, "object not found");
                return Ok(ObjectLookup::NotFound);
            }
            Err(error) => {
                return Err(anyhow::Error::new(error)
                    .context(format!(
                        "Unable to read object file {}",
                        object_path.display()
                    ))
                    .into());
            }
        };

        let framed = match Self::decompress(&compressed) {
            Ok(framed) => framed,
            Err(error) => {
                tracing::error!(oid = %object_id, "corrupt object: {error:#}");
                return Ok(ObjectLookup::Corrupt);
            }
        };

        match ObjectType::parse_frame(&framed) {
            Ok((object_type, body)) => Ok(ObjectLookup::Found(RawObject {
                object_type,
                content: Bytes::copy_from_slice(body),
            })),
            Err(error) => {
                tracing::error!(oid = %object_id, "corrupt object header: {error:#}");
                Ok(ObjectLookup::Corrupt)
            }
        }
    }

    /// Whether `hash` names a stored object. Malformed input is simply absent.
    pub fn exists(&self, hash: &str) -> bool {
        match ObjectId::try_parse(hash) {
            Ok(object_id) => self.path.join(object_id.to_path()).is_file(),
            Err(_) => false,
        }
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> RepositoryResult<ObjectLookup<ObjectBox>> {
        Ok(self.read(object_id)?.and_then(|raw| {
            let reader = Cursor::new(raw.content);
            let parsed = match raw.object_type {
                ObjectType::Blob => {
                    Blob::deserialize(reader).map(|blob| ObjectBox::Blob(Box::new(blob)))
                }
                ObjectType::Tree => {
                    Tree::deserialize(reader).map(|tree| ObjectBox::Tree(Box::new(tree)))
                }
                ObjectType::Commit => {
                    Commit::deserialize(reader).map(|commit| ObjectBox::Commit(Box::new(commit)))
                }
            };

            Self::parsed_or_corrupt(object_id, parsed)
        }))
    }

    pub fn parse_commit(&self, object_id: &ObjectId) -> RepositoryResult<ObjectLookup<Commit>> {
        self.parse_as(object_id, ObjectType::Commit)
    }

    pub fn parse_tree(&self, object_id: &ObjectId) -> RepositoryResult<ObjectLookup<Tree>> {
        self.parse_as(object_id, ObjectType::Tree)
    }

    fn parse_as<T: Unpackable>(
        &self,
        object_id: &ObjectId,
        expected: ObjectType,
    ) -> RepositoryResult<ObjectLookup<T>> {
        Ok(self.read(object_id)?.and_then(|raw| {
            if raw.object_type != expected {
                tracing::error!(
                    oid = %object_id,
                    "expected a {expected} object, found a {}",
                    raw.object_type
                );
                return ObjectLookup::Corrupt;
            }

            Self::parsed_or_corrupt(object_id, T::deserialize(Cursor::new(raw.content)))
        }))
    }

    fn parsed_or_corrupt<T>(object_id: &ObjectId, parsed: anyhow::Result<T>) -> ObjectLookup<T> {
        match parsed {
            Ok(value) => ObjectLookup::Found(value),
            Err(error) => {
                tracing::error!(oid = %object_id, "unparseable object: {error:#}");
                ObjectLookup::Corrupt
            }
        }
    }

    fn write_object(&self, object_path: &Path, framed: &[u8]) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(framed)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content)
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }
}
