mod source_test;

/// Assembles a minimal glTF document with one shared buffer.
#[derive(Default)]
struct DocumentBuilder {
    bin: Vec<u8>,
    views: Vec<String>,
    accessors: Vec<String>,
    meshes: Vec<String>,
}

impl DocumentBuilder {
    fn push_view(&mut self, bytes: &[u8]) -> usize {
        while self.bin.len() % 4 != 0 {
            self.bin.push(0);
        }
        self.views.push(format!(
            r#"{{"buffer":0,"byteOffset":{},"byteLength":{}}}"#,
            self.bin.len(),
            bytes.len()
        ));
        self.bin.extend_from_slice(bytes);
        self.views.len() - 1
    }

    fn push_accessor(&mut self, json: String) -> usize {
        self.accessors.push(json);
        self.accessors.len() - 1
    }

    fn positions(&mut self, positions: &[[f32; 3]]) -> usize {
        let bytes: Vec<u8> = positions.iter().flatten().flat_map(|v| v.to_le_bytes()).collect();
        let view = self.push_view(&bytes);
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for p in positions {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        self.push_accessor(format!(
            r#"{{"bufferView":{view},"componentType":5126,"count":{},"type":"VEC3","min":{min:?},"max":{max:?}}}"#,
            positions.len()
        ))
    }

    fn tex_coords(&mut self, uvs: &[[f32; 2]]) -> usize {
        let bytes: Vec<u8> = uvs.iter().flatten().flat_map(|v| v.to_le_bytes()).collect();
        let view = self.push_view(&bytes);
        self.push_accessor(format!(
            r#"{{"bufferView":{view},"componentType":5126,"count":{},"type":"VEC2"}}"#,
            uvs.len()
        ))
    }

    fn indices(&mut self, indices: &[u16]) -> usize {
        let bytes: Vec<u8> = indices.iter().flat_map(|i| i.to_le_bytes()).collect();
        let view = self.push_view(&bytes);
        self.push_accessor(format!(
            r#"{{"bufferView":{view},"componentType":5123,"count":{},"type":"SCALAR"}}"#,
            indices.len()
        ))
    }

    /// Add a mesh given the JSON of its primitives.
    fn mesh(&mut self, primitives: &[String]) -> &mut Self {
        self.meshes
            .push(format!(r#"{{"primitives":[{}]}}"#, primitives.join(",")));
        self
    }

    fn json(&self, buffer: &str) -> String {
        format!(
            r#"{{"asset":{{"version":"2.0"}},"buffers":[{buffer}],"bufferViews":[{}],"accessors":[{}],"meshes":[{}]}}"#,
            self.views.join(","),
            self.accessors.join(","),
            self.meshes.join(",")
        )
    }

    /// Binary glTF with the buffer in the BIN chunk.
    fn glb(&self) -> Vec<u8> {
        let mut json = self.json(&format!(r#"{{"byteLength":{}}}"#, self.bin.len())).into_bytes();
        while json.len() % 4 != 0 {
            json.push(b' ');
        }
        let mut bin = self.bin.clone();
        while bin.len() % 4 != 0 {
            bin.push(0);
        }

        let total = 12 + 8 + json.len() + 8 + bin.len();
        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(b"glTF");
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&(total as u32).to_le_bytes());
        out.extend_from_slice(&(json.len() as u32).to_le_bytes());
        out.extend_from_slice(b"JSON");
        out.extend_from_slice(&json);
        out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        out.extend_from_slice(b"BIN\0");
        out.extend_from_slice(&bin);
        out
    }

    /// JSON glTF with the buffer embedded as a base64 data URI.
    fn embedded(&self) -> Vec<u8> {
        self.json(&format!(
            r#"{{"byteLength":{},"uri":"data:application/octet-stream;base64,{}"}}"#,
            self.bin.len(),
            encode_base64(&self.bin)
        ))
        .into_bytes()
    }
}

fn encode_base64(bytes: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut out = String::new();
    for chunk in bytes.chunks(3) {
        let n = chunk
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, &b)| acc | u32::from(b) << (16 - 8 * i));
        for i in 0..4 {
            if i <= chunk.len() {
                out.push(TABLE[(n >> (18 - 6 * i) & 63) as usize] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

fn primitive(attributes: &[(&str, usize)], indices: Option<usize>, mode: u32) -> String {
    let attributes: Vec<String> = attributes
        .iter()
        .map(|(name, accessor)| format!(r#""{name}":{accessor}"#))
        .collect();
    let indices = indices.map_or(String::new(), |i| format!(r#","indices":{i}"#));
    format!(
        r#"{{"attributes":{{{}}}{indices},"mode":{mode}}}"#,
        attributes.join(",")
    )
}

#[test]
fn test_encode_base64_helper() {
    assert_eq!(encode_base64(b"a"), "YQ==");
    assert_eq!(encode_base64(b"Hello World"), "SGVsbG8gV29ybGQ=");
    assert_eq!(encode_base64(&[1, 2, 3]), "AQID");
}
