use common::error::ApiError;
use common::model::template::MemeTemplate;

pub enum Msg {
    CatalogLoaded(Result<Vec<MemeTemplate>, ApiError>),
    SelectTemplate(MemeTemplate),
    PreviewLoaded {
        generation: u64,
        result: Result<String, ApiError>,
    },
    EditBox {
        index: usize,
        text: String,
    },
    Submit,
    SubmissionFinished(Result<String, ApiError>),
    Reset,
}
