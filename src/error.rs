use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error",
    Csv{source: csv::Error} = "CSV error",
    Zip{source: zip::result::ZipError} = "zip error",
    XML{source: quick_xml::Error} = "XML error",
    MissingMember{name: String} = "archive has no member named {name}",
    UnknownFormat{extension: String} = "unsupported output format '{extension}'",
    NoLineColumn{source_name: String} = "{source_name} has no usable column"
}
