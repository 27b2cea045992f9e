//! Buffer resolution for self-contained glTF data.

use super::error::GltfError;

/// Collect the bytes of every buffer in `document`, in buffer index order.
///
/// The binary chunk of a `.glb` and base64 data URIs are resolved; a buffer
/// pointing at an external file is an error.
pub(super) fn resolve_buffers(
    document: &gltf_dep::Document,
    mut blob: Option<Vec<u8>>,
) -> Result<Vec<Vec<u8>>, GltfError> {
    document
        .buffers()
        .map(|buffer| match buffer.source() {
            gltf_dep::buffer::Source::Bin => blob.take().ok_or_else(|| {
                GltfError::BufferError(format!(
                    "buffer {} refers to the binary chunk, which is missing or already used",
                    buffer.index()
                ))
            }),
            gltf_dep::buffer::Source::Uri(uri) => decode_data_uri(uri).ok_or_else(|| {
                GltfError::BufferError(format!(
                    "buffer {} is not embedded (only data URIs are read)",
                    buffer.index()
                ))
            }),
        })
        .collect()
}

/// Decode a `data:<mime>;base64,<payload>` URI.
fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (_, payload) = rest.split_once(";base64,")?;
    decode_base64(payload)
}

fn base64_value(c: u8) -> Option<u32> {
    match c {
        b'A'..=b'Z' => Some(u32::from(c - b'A')),
        b'a'..=b'z' => Some(u32::from(c - b'a') + 26),
        b'0'..=b'9' => Some(u32::from(c - b'0') + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Standard-alphabet base64; padding optional, ASCII whitespace ignored.
fn decode_base64(input: &str) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() / 4 * 3);
    let mut acc = 0u32;
    let mut bits = 0u32;
    for c in input.bytes() {
        if c.is_ascii_whitespace() {
            continue;
        }
        if c == b'=' {
            break;
        }
        acc = (acc << 6) | base64_value(c)?;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
            acc &= (1 << bits) - 1;
        }
    }
    Some(out)
}
