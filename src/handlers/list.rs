//! List handler for the habit MCP server

use crate::HabitServerHandler;
use crate::formatting;
use crate::habit::HabitView;
use crate::validation;
use mcp_attr::Result as McpResult;

impl HabitServerHandler {
    /// Builds the sorted view for today and formats it for display.
    /// An explicit sort applies to this listing only.
    pub async fn handle_list_habits(&self, sort: Option<String>) -> McpResult<String> {
        let sort_override = match validation::non_blank(sort) {
            Some(ref sort_str) => Some(validation::parse_sort_order(sort_str)?),
            None => None,
        };

        let data = self.lock_data();
        let today = self.today.today();
        let view = match sort_override {
            Some(order) => HabitView::build_with(&data, &today, order),
            None => HabitView::build(&data, &today),
        };
        drop(data);

        Ok(formatting::format_view(&view))
    }
}
