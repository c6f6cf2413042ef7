//! kiln's application entry point.
//! Collects and validates the user's input, then hands a generation request
//! to the library.

use kiln::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    events::{EventSink, JsonSink, LogSink},
    generator::Generator,
    logger::init_logger,
    prompt::{DialoguerPrompter, Prompter},
    renderer::PlaceholderRenderer,
    request::{GenerationRequest, SourceKind},
    validate::{default_project_name, validate_project_name, validate_source},
};
use log::{debug, info};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Some(commit) = option_env!("KILN_GIT_COMMIT") {
        debug!("Built from git commit: {}", commit);
    }

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Turns the arguments and prompt answers into a validated request.
fn build_request(args: &Args, prompt: &dyn Prompter) -> Result<GenerationRequest> {
    let (source, kind) = args.source();
    info!("Validating input...");
    validate_source(source, kind)?;

    let project_name = match &args.name {
        Some(name) => name.trim().to_string(),
        None => {
            let default = default_project_name(source, kind);
            prompt.input("Enter project name".to_string(), default)?
        }
    };
    validate_project_name(&project_name)?;

    if !prompt.confirm(args.yes, format!("Generate project '{}' from {}?", project_name, source))? {
        return Err(Error::Cancelled);
    }

    let request = match kind {
        SourceKind::Remote => GenerationRequest::remote(project_name, source, args.branch.clone()),
        SourceKind::Local => GenerationRequest::local(project_name, source),
    };
    Ok(request.in_dir(&args.output_dir))
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the template source and asks for the project name
/// 2. Asks for confirmation unless `--yes` is given
/// 3. Materializes the template and substitutes the project name
fn run(args: Args) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let request = build_request(&args, &prompt)?;

    let sink: Box<dyn EventSink> =
        if args.json { Box::new(JsonSink::new()) } else { Box::new(LogSink::new()) };
    let renderer = PlaceholderRenderer::new(&*sink);
    let generator = Generator::new(&*sink, &renderer);

    info!("Generating project '{}'...", request.project_name());
    let destination = generator.generate(&request)?;

    info!(
        "Project '{}' generated successfully in {}!",
        request.project_name(),
        destination.display()
    );
    Ok(())
}
