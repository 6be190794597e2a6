#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GeoDistanceError {
    #[error("origin and destination sequences must be aligned, found {origins} origins and {destinations} destinations")]
    UnalignedSequencesError { origins: usize, destinations: usize },
}
