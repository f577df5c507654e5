//! Plain-text rendering of a board view.

use super::BoardView;
use minijinja::{Environment, context};
use thiserror::Error;

const BOARD_TEMPLATE_NAME: &str = "board.txt";

const BOARD_TEMPLATE: &str = r"Kanban Board
{% for column in columns %}
== {{ column.title }} ({{ column.count }}){% if column.accepts_new %} [+ Add]{% endif %}

{% for card in column.cards %}
- [{{ card.priority_label }}] {{ card.title }}{% if card.dragging %} (dragging){% endif %}

{% if card.description %}
    {{ card.description }}
{% endif %}
{% endfor %}
{% endfor %}
{% if dragging %}
>> dragging: {{ dragging }}
{% endif %}
";

/// Errors returned while rendering a board view.
#[derive(Debug, Error)]
#[error("failed to render board: {0}")]
pub struct ViewError(#[from] minijinja::Error);

/// Renders `view` as plain text, one section per column.
///
/// # Errors
///
/// Returns [`ViewError`] when the template fails to render.
pub fn render_text(view: &BoardView) -> Result<String, ViewError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template(BOARD_TEMPLATE_NAME, BOARD_TEMPLATE)?;
    let template = env.get_template(BOARD_TEMPLATE_NAME)?;
    Ok(template.render(context! {
        columns => &view.columns,
        dragging => &view.dragging,
    })?)
}
