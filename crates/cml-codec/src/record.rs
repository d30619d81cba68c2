use cml_types::{ArgumentMap, Case, Digest, Job, JobKind};

use crate::error::LogError;

/// Bounds-checked sequential reader over a record payload.
///
/// Every read advances the position; a read past the end is a
/// `ShortRecord` error naming the offset and the shortfall. No unchecked
/// offset arithmetic anywhere in record decoding.
struct FieldReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], LogError> {
        let remaining = self.data.len() - self.pos;
        if remaining < n {
            return Err(LogError::ShortRecord {
                offset: self.pos,
                needed: n - remaining,
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn digest(&mut self) -> Result<Digest, LogError> {
        let bytes = self.take(Digest::LEN)?;
        Ok(Digest::from_array(bytes.try_into().unwrap()))
    }

    fn u8(&mut self) -> Result<u8, LogError> {
        Ok(self.take(1)?[0])
    }

    fn u16_be(&mut self) -> Result<u16, LogError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes(bytes.try_into().unwrap()))
    }

    fn i64_be(&mut self) -> Result<i64, LogError> {
        let bytes = self.take(8)?;
        Ok(i64::from_be_bytes(bytes.try_into().unwrap()))
    }

    fn utf8(&mut self, n: usize, field: &'static str) -> Result<String, LogError> {
        let bytes = self.take(n)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| LogError::InvalidUtf8 { field })
    }
}

/// Check the stated frame digest before any field extraction.
fn verify_payload(payload: &[u8], stated: &Digest) -> Result<(), LogError> {
    let computed = cml_crypto::record_digest(payload);
    if computed != *stated {
        return Err(LogError::RecordDigestMismatch {
            stated: *stated,
            computed,
        });
    }
    Ok(())
}

/// Decode a case record payload.
///
/// The stated digest from the outer frame must match the payload before
/// any field is interpreted; a mismatch fails closed with no extraction
/// attempted. Layout:
///
/// ```text
/// caseDigest[20] codemodDigest[20] createdAt:i64
/// pathLen:u16 path[pathLen] recordLen:u16 argumentJson[recordLen]
/// ```
pub fn decode_case(payload: &[u8], stated: &Digest) -> Result<Case, LogError> {
    verify_payload(payload, stated)?;

    let mut fields = FieldReader::new(payload);
    let digest = fields.digest()?;
    let codemod_digest = fields.digest()?;
    let created_at = fields.i64_be()?;
    let path_len = fields.u16_be()? as usize;
    let target_path = fields.utf8(path_len, "target path")?;
    let record_len = fields.u16_be()? as usize;
    let record_bytes = fields.take(record_len)?;
    let arguments: ArgumentMap = serde_json::from_slice(record_bytes)
        .map_err(|e| LogError::MalformedArguments(e.to_string()))?;

    Ok(Case {
        digest,
        codemod_digest,
        created_at,
        target_path,
        arguments,
    })
}

/// Decode a job record payload.
///
/// Same digest-first discipline as [`decode_case`]. Layout:
///
/// ```text
/// jobDigest[20] kind:u8 oldUriLen:u16 oldUri[oldUriLen]
/// newUriLen:u16 newUri[newUriLen]
/// ```
pub fn decode_job(payload: &[u8], stated: &Digest) -> Result<Job, LogError> {
    verify_payload(payload, stated)?;

    let mut fields = FieldReader::new(payload);
    let digest = fields.digest()?;
    let kind_byte = fields.u8()?;
    let kind = JobKind::from_wire(kind_byte).ok_or(LogError::UnknownJobKind(kind_byte))?;
    let old_len = fields.u16_be()? as usize;
    let old_uri = fields.utf8(old_len, "old URI")?;
    let new_len = fields.u16_be()? as usize;
    let new_uri = fields.utf8(new_len, "new URI")?;

    Ok(Job {
        digest,
        kind,
        old_uri,
        new_uri,
    })
}
