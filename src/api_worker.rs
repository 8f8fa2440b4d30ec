use crate::api::BackendClient;
use crate::file_io;
use crate::logger;
use crate::models::{ApiRequest, ApiResponse, ExportKind};
use crossbeam_channel::{Receiver, Sender};
use reqwest::StatusCode;
use std::thread;

/// Spawns the thread that owns all network I/O. Requests are processed one at
/// a time in arrival order; the UI thread keeps running regardless of how
/// long any call takes.
pub fn spawn_api_worker(
    tx: Sender<ApiResponse>,
    rx: Receiver<ApiRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("vocab-station::api_worker".to_string())
        .spawn(move || {
            let client = BackendClient::from_env();
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Failed to start worker runtime: {}", e));
                    return;
                }
            };

            loop {
                match rx.recv() {
                    Ok(request) => {
                        let response = rt.block_on(handle_request(&client, request));
                        if tx.send(response).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        logger::log("API worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("Failed to spawn API worker thread")
}

async fn handle_request(client: &BackendClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Lookup {
            word,
            source_lang,
            target_lang,
            secondary_lang,
        } => {
            let result = client
                .lookup(
                    &word,
                    &source_lang,
                    &target_lang,
                    secondary_lang.as_deref(),
                )
                .await
                .map_err(lookup_error_message);
            ApiResponse::Lookup(result)
        }
        ApiRequest::FetchLists => {
            ApiResponse::Lists(client.lists().await.map_err(|e| e.to_string()))
        }
        ApiRequest::CreateList { name } => {
            ApiResponse::ListCreated(client.create_list(&name).await.map_err(|e| e.to_string()))
        }
        ApiRequest::RenameList { id, name } => ApiResponse::MutationDone {
            action: "rename list",
            result: client
                .rename_list(id, &name)
                .await
                .map_err(|e| e.to_string()),
        },
        ApiRequest::DeleteList { id } => ApiResponse::MutationDone {
            action: "delete list",
            result: client.delete_list(id).await.map_err(|e| e.to_string()),
        },
        ApiRequest::FetchCards { list_id } => ApiResponse::Cards {
            list_id,
            result: client.cards(list_id).await.map_err(|e| e.to_string()),
        },
        ApiRequest::SaveCard { list_id, card } => ApiResponse::MutationDone {
            action: "save card",
            result: client
                .save_card(list_id, &card)
                .await
                .map_err(|e| e.to_string()),
        },
        ApiRequest::UpdateCard { list_id, card } => ApiResponse::MutationDone {
            action: "update card",
            result: client
                .update_card(list_id, &card)
                .await
                .map_err(|e| e.to_string()),
        },
        ApiRequest::DeleteCard {
            list_id,
            clean_word,
        } => ApiResponse::MutationDone {
            action: "delete card",
            result: client
                .delete_card(list_id, &clean_word)
                .await
                .map_err(|e| e.to_string()),
        },
        ApiRequest::ExportAnki {
            cards,
            deck_name,
            source_lang,
            target_lang,
            secondary_lang,
        } => {
            let result = client
                .export_anki(
                    &cards,
                    &deck_name,
                    &source_lang,
                    &target_lang,
                    secondary_lang.as_deref(),
                )
                .await;
            ApiResponse::ExportDone {
                kind: ExportKind::Anki,
                result: write_export(result, &deck_name, ExportKind::Anki),
            }
        }
        ApiRequest::ExportObsidian {
            cards,
            note_name,
            source_lang,
            target_lang,
            secondary_lang,
        } => {
            let result = client
                .export_obsidian(
                    &cards,
                    &note_name,
                    &source_lang,
                    &target_lang,
                    secondary_lang.as_deref(),
                )
                .await;
            ApiResponse::ExportDone {
                kind: ExportKind::Obsidian,
                result: write_export(result, &note_name, ExportKind::Obsidian),
            }
        }
    }
}

fn write_export(
    result: Result<Vec<u8>, reqwest::Error>,
    name: &str,
    kind: ExportKind,
) -> Result<std::path::PathBuf, String> {
    let bytes = result.map_err(|e| e.to_string())?;
    let filename = format!("{}.{}", name, kind.extension());
    file_io::save_export(&bytes, &filename).map_err(|e| e.to_string())
}

fn lookup_error_message(error: reqwest::Error) -> String {
    if error.status() == Some(StatusCode::NOT_FOUND) {
        "Could not find word. Please try again.".to_string()
    } else {
        format!("Lookup failed: {}", error)
    }
}
