/// STL edge loader for binary and ASCII formats
///
/// Wireframe previews only need line segments, so facet normals are
/// parsed and discarded; every triangle contributes its three edges.
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{multispace0, multispace1},
    multi::many0,
    number::complete::float,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

use crate::geometry::Edge;
use crate::model::WireframeModel;

#[derive(Debug, Error)]
pub enum StlError {
    #[error("file too small to be a valid STL")]
    Truncated,
    #[error("unexpected end of file after {0} facets")]
    UnexpectedEof(usize),
    #[error("failed to parse ASCII STL: {0}")]
    Ascii(String),
}

/// Parse a binary STL file into its wireframe edges.
pub fn parse_binary_stl(data: &[u8]) -> Result<Vec<Edge>, StlError> {
    if data.len() < 84 {
        return Err(StlError::Truncated);
    }

    // Skip 80-byte header
    let data = &data[80..];

    // Read triangle count (4 bytes, little-endian)
    let facet_count = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

    // cap the reservation by what the file could actually hold
    let mut edges = Vec::with_capacity(facet_count.min(data.len() / 50) * 3);
    let mut offset = 4;

    for facet in 0..facet_count {
        if offset + 50 > data.len() {
            return Err(StlError::UnexpectedEof(facet));
        }

        // Skip the normal (3 floats)
        offset += 12;

        // Read 3 vertices (9 floats)
        let mut vertices = [(0.0f32, 0.0f32, 0.0f32); 3];
        for vertex in &mut vertices {
            let x = read_f32_le(data, offset);
            let y = read_f32_le(data, offset + 4);
            let z = read_f32_le(data, offset + 8);
            *vertex = (x, y, z);
            offset += 12;
        }

        // Skip attribute byte count (2 bytes)
        offset += 2;

        push_facet_edges(&mut edges, vertices);
    }

    Ok(edges)
}

fn read_f32_le(data: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn push_facet_edges(edges: &mut Vec<Edge>, v: [(f32, f32, f32); 3]) {
    for (a, b) in [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])] {
        edges.push(Edge::from_coords(a.0, a.1, a.2, b.0, b.1, b.2));
    }
}

/// Parse an ASCII STL file into its wireframe edges.
pub fn parse_ascii_stl(input: &str) -> Result<Vec<Edge>, StlError> {
    match parse_ascii_stl_impl(input) {
        Ok((_, edges)) => Ok(edges),
        Err(e) => Err(StlError::Ascii(format!("{:?}", e))),
    }
}

fn parse_ascii_stl_impl(input: &str) -> IResult<&str, Vec<Edge>> {
    let (input, _) = preceded(multispace0, tag("solid"))(input)?;
    // Optional solid name, rest of the header line
    let (input, _) = take_till(|c| c == '\n')(input)?;
    let (input, facets) = many0(parse_facet)(input)?;
    let (input, _) = preceded(multispace0, tag("endsolid"))(input)?;

    let mut edges = Vec::with_capacity(facets.len() * 3);
    for facet in facets {
        push_facet_edges(&mut edges, facet);
    }

    Ok((input, edges))
}

fn parse_facet(input: &str) -> IResult<&str, [(f32, f32, f32); 3]> {
    let (input, _) = preceded(multispace0, tag("facet"))(input)?;
    let (input, _) = preceded(multispace1, tag("normal"))(input)?;
    let (input, _normal) = parse_vector3(input)?;
    let (input, _) = preceded(multispace0, tag("outer"))(input)?;
    let (input, _) = preceded(multispace1, tag("loop"))(input)?;
    let (input, v1) = parse_vertex(input)?;
    let (input, v2) = parse_vertex(input)?;
    let (input, v3) = parse_vertex(input)?;
    let (input, _) = preceded(multispace0, tag("endloop"))(input)?;
    let (input, _) = preceded(multispace0, tag("endfacet"))(input)?;

    Ok((input, [v1, v2, v3]))
}

fn parse_vertex(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = preceded(multispace0, tag("vertex"))(input)?;
    parse_vector3(input)
}

fn parse_vector3(input: &str) -> IResult<&str, (f32, f32, f32)> {
    let (input, _) = multispace0(input)?;
    let (input, x) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = float(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = float(input)?;
    Ok((input, (x, y, z)))
}

/// Detect and parse an STL file (binary or ASCII).
pub fn parse_stl(data: &[u8]) -> Result<Vec<Edge>, StlError> {
    // Files starting with "solid" might be ASCII; binary is the fallback
    if data.len() > 5 && &data[0..5] == b"solid" {
        if let Ok(text) = std::str::from_utf8(data) {
            if let Ok(edges) = parse_ascii_stl(text) {
                return Ok(edges);
            }
        }
    }

    parse_binary_stl(data)
}

/// Parse an STL file and populate a model ready for `prepare_drawing`.
pub fn load_model(data: &[u8]) -> Result<WireframeModel, StlError> {
    let edges = parse_stl(data)?;
    log::debug!("loaded {} edges from {} bytes of STL", edges.len(), data.len());
    Ok(WireframeModel::from_edges(edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASCII_TRIANGLE: &str = "solid tri
        facet normal 0 0 1
            outer loop
                vertex 0 0 0
                vertex 1 0 0
                vertex 0 1 0
            endloop
        endfacet
    endsolid tri";

    #[test]
    fn test_parse_binary_header() {
        let mut data = vec![0u8; 84];
        // Set triangle count to 0
        data[80..84].copy_from_slice(&0u32.to_le_bytes());

        let edges = parse_binary_stl(&data).unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn test_binary_too_small() {
        assert!(matches!(parse_binary_stl(&[0u8; 10]), Err(StlError::Truncated)));
    }

    #[test]
    fn test_binary_truncated_facet() {
        let mut data = vec![0u8; 84];
        data[80..84].copy_from_slice(&2u32.to_le_bytes());
        // room for zero of the two advertised facets
        assert!(matches!(
            parse_binary_stl(&data),
            Err(StlError::UnexpectedEof(0))
        ));
    }

    #[test]
    fn test_binary_single_facet() {
        let mut data = vec![0u8; 84 + 50];
        data[80..84].copy_from_slice(&1u32.to_le_bytes());
        let mut offset = 84 + 12; // past header, count, normal
        for v in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
            for c in v {
                data[offset..offset + 4].copy_from_slice(&c.to_le_bytes());
                offset += 4;
            }
        }

        let edges = parse_binary_stl(&data).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].p0.x, 0.0);
        assert_eq!(edges[0].p1.x, 1.0);
        // the loop closes back to the first vertex
        assert_eq!(edges[2].p1, edges[0].p0);
    }

    #[test]
    fn test_parse_ascii_triangle() {
        let edges = parse_ascii_stl(ASCII_TRIANGLE).unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[1].p0.x, 1.0);
        assert_eq!(edges[1].p1.y, 1.0);
    }

    #[test]
    fn test_detection_prefers_ascii() {
        let edges = parse_stl(ASCII_TRIANGLE.as_bytes()).unwrap();
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn test_load_model() {
        let mut model = load_model(ASCII_TRIANGLE.as_bytes()).unwrap();
        model.prepare_drawing();
        assert_eq!(model.draw_order().len(), 3);
    }
}
