/// Ports module defining the interfaces between the application core and
/// the outside world (tracker API, filesystem, spreadsheets, console).
pub mod outbound;
