use maud::{Markup, html};

use crate::{
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, form_error, save_button},
    project::ProjectId,
};

pub(crate) const CREATE_PROJECT_MODAL_ID: &str = "create-project-modal";

pub(crate) fn edit_project_modal_id(project_id: ProjectId) -> String {
    format!("edit-project-modal-{project_id}")
}

/// The values to show in the project form. Without a `project_id` the form
/// creates a new project.
#[derive(Debug, Default)]
pub(crate) struct ProjectFormView<'a> {
    pub project_id: Option<ProjectId>,
    pub name: &'a str,
    pub error_message: Option<&'a str>,
}

pub(crate) fn project_form(view: ProjectFormView<'_>) -> Markup {
    let (create_endpoint, update_endpoint) = match view.project_id {
        Some(id) => (None, Some(endpoints::format_endpoint(endpoints::PROJECT, id))),
        None => (Some(endpoints::PROJECTS_API), None),
    };
    let name_id = match view.project_id {
        Some(id) => format!("project-name-{id}"),
        None => "project-name-new".to_owned(),
    };

    html! {
        form
            hx-post=[create_endpoint]
            hx-put=[update_endpoint]
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            div
            {
                label for=(name_id) class=(FORM_LABEL_STYLE) { "Proje Adı" }

                input
                    id=(name_id)
                    type="text"
                    name="name"
                    placeholder="Proje Adı"
                    value=(view.name)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            (form_error(view.error_message))

            (save_button())
        }
    }
}
