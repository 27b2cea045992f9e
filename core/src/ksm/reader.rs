//! `.ksm` decoding.

use std::io::{ErrorKind, Read};

use crate::error::{KsmError, KsmResult};

use super::format::{FACE_SIZE, FACE_TAG, KsmFile, KsmVertex, MAGIC, VERTEX_SIZE, VERTEX_TAG};

/// Upper bound on capacity reserved from an untrusted chunk count.
const MAX_PREALLOCATED: usize = 1 << 16;

fn read_exact_in<R: Read>(reader: &mut R, buf: &mut [u8], chunk: &'static str) -> KsmResult<()> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => KsmError::Truncated { chunk },
        _ => KsmError::Io(err),
    })
}

fn read_header<R: Read>(reader: &mut R, tag: &[u8; 4], chunk: &'static str) -> KsmResult<usize> {
    let mut header = [0u8; 8];
    read_exact_in(reader, &mut header, chunk)?;
    let found = [header[0], header[1], header[2], header[3]];
    if &found != tag {
        return Err(KsmError::UnexpectedTag {
            expected: chunk,
            found,
        });
    }
    let count = i32::from_be_bytes([header[4], header[5], header[6], header[7]]);
    usize::try_from(count).map_err(|_| KsmError::NegativeCount { chunk, count })
}

/// Decode a complete `.ksm` file.
///
/// The data must hold exactly the magic, one `vert` chunk and one `face`
/// chunk. Face indices are returned as stored and are not range checked; see
/// [`KsmFile::find_invalid_face`].
pub fn read_ksm<R: Read>(mut reader: R) -> KsmResult<KsmFile> {
    let mut magic = [0u8; 4];
    read_exact_in(&mut reader, &mut magic, "_KSM")?;
    if magic != MAGIC {
        return Err(KsmError::BadMagic(magic));
    }

    let vertex_count = read_header(&mut reader, &VERTEX_TAG, "vert")?;
    let mut vertices = Vec::with_capacity(vertex_count.min(MAX_PREALLOCATED));
    let mut vertex = [0u8; VERTEX_SIZE];
    for _ in 0..vertex_count {
        read_exact_in(&mut reader, &mut vertex, "vert")?;
        vertices.push(KsmVertex::from_le_bytes(&vertex));
    }

    let face_count = read_header(&mut reader, &FACE_TAG, "face")?;
    let mut faces = Vec::with_capacity(face_count.min(MAX_PREALLOCATED));
    let mut face = [0u8; FACE_SIZE];
    for _ in 0..face_count {
        read_exact_in(&mut reader, &mut face, "face")?;
        faces.push([0, 4, 8].map(|o| {
            i32::from_le_bytes([face[o], face[o + 1], face[o + 2], face[o + 3]])
        }));
    }

    let mut rest = Vec::new();
    reader.read_to_end(&mut rest)?;
    if !rest.is_empty() {
        return Err(KsmError::TrailingBytes(rest.len()));
    }

    log::debug!("read ksm: {vertex_count} vertices, {face_count} faces");
    Ok(KsmFile { vertices, faces })
}

/// Decode a `.ksm` image held in memory.
pub fn decode_ksm(bytes: &[u8]) -> KsmResult<KsmFile> {
    read_ksm(bytes)
}
