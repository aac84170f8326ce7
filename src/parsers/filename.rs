use crate::errors::SkipReason;
use crate::utils::strip_json_extension;

const SEGMENT_SEPARATOR: char = '_';
const MIN_SEGMENTS: usize = 3;

/// Identifiers encoded in a grouped filename such as `v84_1_p1.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedFileName {
    /// First two segments joined, e.g. `v84_1`
    pub group_id: String,
    /// Second segment, e.g. `1`
    pub group_index: String,
    /// Third segment, e.g. `p1`
    pub child_id: String,
}

/// Split a grouped filename into its group and child identifiers
///
/// Segments past the third are ignored.
pub fn parse_grouped_filename(filename: &str) -> Result<GroupedFileName, SkipReason> {
    let segments: Vec<&str> = strip_json_extension(filename).split(SEGMENT_SEPARATOR).collect();

    if segments.len() < MIN_SEGMENTS {
        return Err(SkipReason::MalformedFilename { segments: segments.len() });
    }

    Ok(GroupedFileName {
        group_id: format!("{}{}{}", segments[0], SEGMENT_SEPARATOR, segments[1]),
        group_index: segments[1].to_string(),
        child_id: segments[2].to_string(),
    })
}
