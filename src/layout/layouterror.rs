use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("track {track} has no curve present in the frame to anchor grid or points")]
    EmptyTrack {
        track: usize
    },

    #[error("anchor curve '{curve}' of track {track} is not in the frame")]
    NoAnchorCurve {
        track: usize,
        curve: String
    },

    #[error("anchor curve '{curve}' of track {track} has no configured range")]
    MissingAnchorRange {
        track: usize,
        curve: String
    },

    #[error("range of curve '{curve}' in track {track} has left == right")]
    DegenerateRange {
        track: usize,
        curve: String
    },

    #[error("point overlay refers to track {0}, which does not exist")]
    UnknownTrack(usize),

    #[error("depth key '{0}' is not a column of the frame")]
    MissingDepthKey(String),

    #[error("plot sizing must have 0 <= header height < total height and a positive track width")]
    InvalidSizing
}
