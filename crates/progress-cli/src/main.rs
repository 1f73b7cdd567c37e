//! CLI de inspección de progreso: reconstruye el estado del pipeline desde
//! un payload de detalle de tarea en JSON local.
//!
//! Uso:
//!   progress show [--file <task.json>] [--json]
//!   progress retry --step <ID> [--file <task.json>] [--json]
//!
//! `retry` no dispara nada contra el backend: muestra la proyección
//! optimista que la UI exhibiría hasta el próximo fetch autoritativo.

use book_domain::{TaskDetailPayload, TaskSnapshot};
use progress_core::reducer::StepState;
use progress_core::render::{render_connectors, render_steps, ConnectorState, ProgressView};
use progress_core::{map_current_step, project_retry, reconstruct_progress, reduce, resolve_flow};

fn usage() -> ! {
    eprintln!("uso: progress show [--file <task.json>] [--json]");
    eprintln!("     progress retry --step <ID> [--file <task.json>] [--json]");
    std::process::exit(2);
}

fn state_glyph(state: StepState) -> &'static str {
    match state {
        StepState::ToDo => "[ ]",
        StepState::Current => "[>]",
        StepState::Processed => "[x]",
        StepState::Failed => "[!]",
    }
}

fn connector_glyph(state: ConnectorState) -> &'static str {
    match state {
        ConnectorState::Neutral => "   |",
        ConnectorState::Processed => "   |=",
        ConnectorState::Failed => "   |!",
    }
}

fn print_view(view: &ProgressView, as_json: bool) {
    if as_json {
        match serde_json::to_string_pretty(view) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("[progress] error serializando vista: {e}");
                std::process::exit(5);
            }
        }
        return;
    }
    for (i, step) in view.steps.iter().enumerate() {
        println!("{} {}  ({})", state_glyph(step.state), step.label, step.id);
        if let Some(conn) = view.connectors.get(i) {
            println!("{}", connector_glyph(*conn));
        }
    }
    println!("definition_hash: {}", view.definition_hash);
}

fn load_snapshot(file: &str) -> TaskSnapshot {
    let raw = match std::fs::read_to_string(file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[progress] no se pudo leer {file}: {e}");
            std::process::exit(5);
        }
    };
    match TaskDetailPayload::from_json(&raw) {
        Ok(payload) => TaskSnapshot::from_payload(&payload),
        Err(e) => {
            eprintln!("[progress] {e}");
            std::process::exit(5);
        }
    }
}

fn main() {
    // Cargar .env si existe (BOOKFLOW_TASK_FILE, RUST_LOG).
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                             .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let mut file: Option<String> = std::env::var("BOOKFLOW_TASK_FILE").ok();
    let mut step: Option<String> = None;
    let mut as_json = false;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                i += 1;
                if i < args.len() {
                    file = Some(args[i].clone());
                }
            }
            "--step" => {
                i += 1;
                if i < args.len() {
                    step = Some(args[i].clone());
                }
            }
            "--json" => as_json = true,
            _ => usage(),
        }
        i += 1;
    }

    let Some(file) = file else {
        eprintln!("[progress] falta --file (o BOOKFLOW_TASK_FILE)");
        std::process::exit(2);
    };

    match args[1].as_str() {
        "show" => {
            let snap = load_snapshot(&file);
            let view = reconstruct_progress(&snap);
            print_view(&view, as_json);
        }
        "retry" => {
            let Some(step_id) = step else {
                eprintln!("[progress] retry requiere --step <ID>");
                std::process::exit(2);
            };
            let snap = load_snapshot(&file);
            let flow = resolve_flow(&snap);
            if !flow.contains(&step_id) {
                eprintln!("[progress] el paso {step_id} no pertenece al flujo de la tarea");
                std::process::exit(4);
            }
            let current = map_current_step(&snap, &flow);
            let prior = reduce(&flow, &snap, current.as_deref());
            let projected = project_retry(&flow, &prior, &step_id);
            let steps = render_steps(&flow, &projected);
            let connectors = render_connectors(&steps);
            let view = ProgressView { definition_hash: flow.definition_hash.clone(),
                                      current_step: Some(step_id),
                                      steps,
                                      connectors };
            println!("-- proyección provisional (se descarta en el próximo fetch) --");
            print_view(&view, as_json);
        }
        _ => usage(),
    }
}
