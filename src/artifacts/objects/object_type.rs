use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Frame `content` as `<kind> <length>\0<content>`.
    ///
    /// Every kind uses the same header, so hashes are comparable across kinds.
    pub fn frame(&self, content: &[u8]) -> Vec<u8> {
        let header = format!("{} {}\0", self.as_str(), content.len());

        let mut framed = Vec::with_capacity(header.len() + content.len());
        framed.extend_from_slice(header.as_bytes());
        framed.extend_from_slice(content);
        framed
    }

    /// Split a framed buffer into its kind and body, validating the declared length.
    pub fn parse_frame(framed: &[u8]) -> anyhow::Result<(ObjectType, &[u8])> {
        let nul = framed
            .iter()
            .position(|&byte| byte == b'\0')
            .context("Invalid object header: missing NUL separator")?;
        let header = std::str::from_utf8(&framed[..nul]).context("Invalid object header")?;
        let (kind, size) = header
            .split_once(' ')
            .context("Invalid object header: missing size")?;

        let object_type = ObjectType::try_from(kind)?;
        let size = size
            .parse::<usize>()
            .with_context(|| format!("Invalid object size: {size}"))?;

        let body = &framed[nul + 1..];
        if body.len() != size {
            anyhow::bail!(
                "Object size mismatch: header says {size}, body has {}",
                body.len()
            );
        }

        Ok((object_type, body))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            _ => Err(anyhow::anyhow!("Invalid object type: {value}")),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
