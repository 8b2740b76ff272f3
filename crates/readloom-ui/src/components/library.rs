//! Library page: series grid with the full create/edit/delete loop.

use crate::app::api::ApiCtx;
use crate::components::modal::ModalView;
use crate::core::modal::{
    ModalAction, ModalConfig, ModalId, ModalPayload, ModalResult, ModalSize,
};
use crate::core::store::AppStore;
use crate::services::confirm::ConfirmService;
use crate::services::modals::{close_modal, open_modal, show_book_details, show_manga_details};
use crate::services::series::SeriesService;
use readloom_api_models::{MediaType, Series, SeriesInput, SeriesStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(LibraryPage)]
pub(crate) fn library_page() -> Html {
    let Some(api) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let confirm = use_context::<ConfirmService>().unwrap_or_default();
    let dispatch = Dispatch::<AppStore>::new();
    let series_list = use_selector(|store: &AppStore| store.library.series.clone());

    {
        let api = api.clone();
        use_effect_with_deps(
            move |_| {
                let dispatch = Dispatch::<AppStore>::new();
                let service = SeriesService::new(api.client.clone(), dispatch.clone());
                spawn_local(async move {
                    if let Err(err) = service.get_all(&[]).await {
                        dispatch.reduce_mut(|store| store.toasts.error(err.message()));
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_add = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            open_modal(
                &dispatch,
                ModalConfig::new(ModalId::Series, "Add series")
                    .with_size(ModalSize::Large)
                    .scrollable()
                    .with_data(ModalPayload::SeriesForm(None)),
            );
        })
    };
    let on_edit = {
        let dispatch = dispatch.clone();
        Callback::from(move |series: Series| {
            open_modal(
                &dispatch,
                ModalConfig::new(ModalId::Series, format!("Edit {}", series.title))
                    .with_size(ModalSize::Large)
                    .scrollable()
                    .with_data(ModalPayload::SeriesForm(Some(series))),
            );
        })
    };
    let on_delete = {
        let api = api.clone();
        let confirm = confirm.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |series: Series| {
            let confirm = confirm.clone();
            let dispatch = dispatch.clone();
            let service = SeriesService::new(api.client.clone(), dispatch.clone());
            spawn_local(async move {
                if !confirm.confirm_delete(&dispatch, &series.title).await {
                    return;
                }
                match service.delete(series.id).await {
                    Ok(()) => dispatch.reduce_mut(|store| {
                        store.toasts.success(format!("Deleted {}", series.title));
                    }),
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.toasts.error(err.message());
                    }),
                }
            });
        })
    };
    let on_details = {
        let api = api.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |series: Series| {
            let dispatch = dispatch.clone();
            let service = SeriesService::new(api.client.clone(), dispatch.clone());
            spawn_local(async move {
                if series.media_type.is_comic_like() {
                    match service.chapters(series.id).await {
                        Ok(chapters) => show_manga_details(&dispatch, series, chapters),
                        Err(err) => dispatch.reduce_mut(|store| {
                            store.toasts.error(err.message());
                        }),
                    }
                } else {
                    match service.volumes(series.id).await {
                        Ok(volumes) => show_book_details(&dispatch, series, volumes),
                        Err(err) => dispatch.reduce_mut(|store| {
                            store.toasts.error(err.message());
                        }),
                    }
                }
            });
        })
    };

    let body = match series_list.as_ref() {
        None => html! { <div class="page-loading">{"Loading series…"}</div> },
        Some(list) if list.is_empty() => html! {
            <p class="muted">{"The library is empty. Add your first series."}</p>
        },
        Some(list) => html! {
            <div class="series-grid">
                {for list.iter().map(|series| {
                    series_card(series, on_edit.clone(), on_delete.clone(), on_details.clone())
                })}
            </div>
        },
    };

    html! {
        <div class="library">
            <div class="page-header">
                <h2>{"Library"}</h2>
                <button class="btn btn-primary" onclick={on_add}>{"Add series"}</button>
            </div>
            {body}
            <SeriesFormModal />
            <DetailsModal id={ModalId::BookDetails} />
            <DetailsModal id={ModalId::MangaDetails} />
        </div>
    }
}

fn series_card(
    series: &Series,
    on_edit: Callback<Series>,
    on_delete: Callback<Series>,
    on_details: Callback<Series>,
) -> Html {
    let edit = {
        let series = series.clone();
        Callback::from(move |_| on_edit.emit(series.clone()))
    };
    let delete = {
        let series = series.clone();
        Callback::from(move |_| on_delete.emit(series.clone()))
    };
    let details = {
        let series = series.clone();
        Callback::from(move |_| on_details.emit(series.clone()))
    };

    html! {
        <div key={series.id.to_string()} class="series-card">
            <div class="series-card-body" onclick={details}>
                <span class="title">{series.shelf_title().to_string()}</span>
                <span class="muted">{series.media_type.label()}</span>
                <span class="muted">{series.status.label()}</span>
                <span class="counts">
                    {format!("{} volumes · {} chapters", series.volume_count, series.chapter_count)}
                </span>
            </div>
            <div class="series-card-actions">
                <button class="btn btn-ghost" onclick={edit}>{"Edit"}</button>
                <button class="btn btn-ghost" onclick={delete}>{"Delete"}</button>
            </div>
        </div>
    }
}

/// Form host for the `seriesModal` channel. Saving publishes a `save` or
/// `update` result before the channel closes.
#[function_component(SeriesFormModal)]
fn series_form_modal() -> Html {
    let Some(api) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let dispatch = Dispatch::<AppStore>::new();
    let config = use_selector(|store: &AppStore| store.modals.config(ModalId::Series).cloned());

    let title = use_state(String::new);
    let author = use_state(String::new);
    let description = use_state(String::new);
    let media_type = use_state(MediaType::default);
    let status = use_state(SeriesStatus::default);
    let busy = use_state(|| false);

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(|store| {
                    store.modals.register(ModalId::Series);
                });
                || ()
            },
            (),
        );
    }

    // Reseed the fields each time the channel opens.
    {
        let title = title.clone();
        let author = author.clone();
        let description = description.clone();
        let media_type = media_type.clone();
        let status = status.clone();
        let busy = busy.clone();
        use_effect_with_deps(
            move |config: &Option<ModalConfig>| {
                if let Some(config) = config {
                    let seed = match &config.data {
                        ModalPayload::SeriesForm(seed) => seed.clone(),
                        _ => None,
                    };
                    title.set(seed.as_ref().map(|s| s.title.clone()).unwrap_or_default());
                    author.set(
                        seed.as_ref()
                            .and_then(|s| s.author.clone())
                            .unwrap_or_default(),
                    );
                    description.set(
                        seed.as_ref()
                            .and_then(|s| s.description.clone())
                            .unwrap_or_default(),
                    );
                    media_type.set(seed.as_ref().map(|s| s.media_type).unwrap_or_default());
                    status.set(seed.as_ref().map(|s| s.status).unwrap_or_default());
                    busy.set(false);
                }
                || ()
            },
            (*config).clone(),
        );
    }

    let Some(open_config) = (*config).clone() else {
        return html! {};
    };
    let existing = match &open_config.data {
        ModalPayload::SeriesForm(seed) => seed.clone(),
        _ => None,
    };

    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| close_modal(&dispatch, ModalId::Series))
    };
    let on_cancel = {
        let on_close = on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let on_title = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            title.set(input.value());
        })
    };
    let on_author = {
        let author = author.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            author.set(input.value());
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            description.set(input.value());
        })
    };
    let on_media_type = {
        let media_type = media_type.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(value) = MediaType::from_value(&select.value()) {
                media_type.set(value);
            }
        })
    };
    let on_status = {
        let status = status.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(value) = SeriesStatus::from_value(&select.value()) {
                status.set(value);
            }
        })
    };

    let on_save = {
        let dispatch = dispatch.clone();
        let busy = busy.clone();
        let existing = existing.clone();
        let title = title.clone();
        let author = author.clone();
        let description = description.clone();
        let media_type = media_type.clone();
        let status = status.clone();
        Callback::from(move |_| {
            let trimmed = title.trim().to_string();
            if trimmed.is_empty() {
                dispatch.reduce_mut(|store| store.toasts.warning("A title is required."));
                return;
            }
            let input = SeriesInput {
                title: trimmed,
                author: non_empty(&author),
                description: non_empty(&description),
                media_type: *media_type,
                status: *status,
                ..SeriesInput::default()
            };
            let dispatch = dispatch.clone();
            let busy = busy.clone();
            let existing = existing.clone();
            let service = SeriesService::new(api.client.clone(), dispatch.clone());
            busy.set(true);
            spawn_local(async move {
                let (outcome, action) = match &existing {
                    Some(series) => (service.update(series.id, &input).await, ModalAction::Update),
                    None => (service.create(&input).await, ModalAction::Save),
                };
                match outcome {
                    Ok(series) => {
                        dispatch.reduce_mut(|store| {
                            store.toasts.success(format!("Saved {}", series.title));
                            store.modals.set_result(
                                ModalId::Series,
                                ModalResult::new(action)
                                    .with_data(ModalPayload::SeriesForm(Some(series))),
                            );
                            store.modals.close(ModalId::Series);
                        });
                    }
                    Err(err) => {
                        // The form stays open so the user can retry.
                        busy.set(false);
                        dispatch.reduce_mut(|store| store.toasts.error(err.message()));
                    }
                }
            });
        })
    };

    let footer = html! {
        <div class="modal-footer">
            <button class="btn btn-ghost" onclick={on_cancel} disabled={*busy}>{"Cancel"}</button>
            <button class="btn btn-primary" onclick={on_save} disabled={*busy}>
                {if existing.is_some() { "Update" } else { "Save" }}
            </button>
        </div>
    };

    html! {
        <ModalView config={open_config} on_close={on_close} footer={footer}>
            <form class="series-form" onsubmit={Callback::from(|event: SubmitEvent| event.prevent_default())}>
                <label>{"Title"}
                    <input type="text" value={(*title).clone()} oninput={on_title} />
                </label>
                <label>{"Author"}
                    <input type="text" value={(*author).clone()} oninput={on_author} />
                </label>
                <label>{"Type"}
                    <select onchange={on_media_type}>
                        {for MediaType::ALL.iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={*kind == *media_type}>
                                {kind.label()}
                            </option>
                        })}
                    </select>
                </label>
                <label>{"Status"}
                    <select onchange={on_status}>
                        {for SeriesStatus::ALL.iter().map(|value| html! {
                            <option value={value.as_str()} selected={*value == *status}>
                                {value.label()}
                            </option>
                        })}
                    </select>
                </label>
                <label>{"Description"}
                    <textarea value={(*description).clone()} oninput={on_description} />
                </label>
            </form>
        </ModalView>
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Properties, PartialEq)]
struct DetailsModalProps {
    pub id: ModalId,
}

/// Read-only host for the book/manga detail channels.
#[function_component(DetailsModal)]
fn details_modal(props: &DetailsModalProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let id = props.id;
    let config = use_selector(move |store: &AppStore| store.modals.config(id).cloned());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |&id: &ModalId| {
                dispatch.reduce_mut(|store| {
                    store.modals.register(id);
                });
                || ()
            },
            id,
        );
    }

    let Some(open_config) = (*config).clone() else {
        return html! {};
    };
    let on_close = Callback::from(move |()| close_modal(&dispatch, id));

    let body = match &open_config.data {
        ModalPayload::BookDetails(details) => html! {
            <ul class="detail-list">
                {for details.volumes.iter().map(|volume| html! {
                    <li key={volume.id.to_string()}>
                        {format!("Vol. {}", volume.number)}
                        {volume.title.clone().map_or_else(
                            || html! {},
                            |title| html! { <span class="muted">{format!(" — {title}")}</span> },
                        )}
                    </li>
                })}
            </ul>
        },
        ModalPayload::MangaDetails(details) => html! {
            <ul class="detail-list">
                {for details.chapters.iter().map(|chapter| html! {
                    <li key={chapter.id.to_string()}>
                        {format!("Ch. {}", chapter.number)}
                        {chapter.title.clone().map_or_else(
                            || html! {},
                            |title| html! { <span class="muted">{format!(" — {title}")}</span> },
                        )}
                    </li>
                })}
            </ul>
        },
        _ => html! {},
    };

    html! {
        <ModalView config={open_config} on_close={on_close}>
            {body}
        </ModalView>
    }
}
