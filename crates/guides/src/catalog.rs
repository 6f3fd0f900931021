use crate::arguments::Arguments;
use crate::templates;
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const SEARCH_GUIDE: &str = "search-guide";
pub const DETAILS_GUIDE: &str = "details-guide";
pub const TASK_CREATION_GUIDE: &str = "task-creation-guide";
pub const DOCUMENTATION_GUIDE: &str = "documentation-guide";
pub const FULL_WORKFLOW_GUIDE: &str = "full-workflow-guide";
pub const QUICK_COMMANDS_GUIDE: &str = "quick-commands-guide";

/// Pure template expansion for one operation.
pub type Renderer = fn(&Arguments) -> String;

/// One declared input parameter. Every parameter is a JSON string.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
}

impl ParamSpec {
    const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            default: None,
        }
    }

    const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            default: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    #[serde(skip)]
    pub(crate) render: Renderer,
}

impl OperationDescriptor {
    /// JSON-schema-like object describing the accepted arguments.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for param in self.params {
            let mut property = json!({
                "type": "string",
                "description": param.description,
            });
            if let Some(default) = param.default {
                property["default"] = Value::String(default.to_string());
            }
            properties.insert(param.name.to_string(), property);
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String("object".to_string()));
        schema.insert("properties".to_string(), Value::Object(properties));

        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|param| param.required)
            .map(|param| Value::String(param.name.to_string()))
            .collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema
    }

    /// `{name, summary, inputSchema}` entry for tool inventories.
    pub fn inventory_entry(&self) -> Value {
        json!({
            "name": self.name,
            "summary": self.summary,
            "inputSchema": self.input_schema(),
        })
    }

    /// Expands this operation's template. Missing arguments read as `""`.
    pub fn render(&self, args: &Arguments) -> String {
        (self.render)(args)
    }
}

const CATALOG: &[OperationDescriptor] = &[
    OperationDescriptor {
        name: SEARCH_GUIDE,
        summary: "Find a meeting by date or keyword (Fireflies:search).",
        description: r#"Meeting search guide

Required MCP tools:
1. Fireflies:search - find meetings by date or keyword

Examples:
- By date: Fireflies:search query="from:2024-10-24 to:2024-10-24"
- By keyword: Fireflies:search query='keyword:"project"'
- Most recent: Fireflies:search query="limit:10"

Take the meeting ID from the search results."#,
        params: &[ParamSpec::optional(
            "query_hint",
            "Search condition hint (date range, keyword, limit)",
        )],
        render: templates::search_guide,
    },
    OperationDescriptor {
        name: DETAILS_GUIDE,
        summary: "Fetch summary, action items and transcript for one meeting.",
        description: r#"Meeting details guide

Required MCP tools:
1. Fireflies:get_summary - summary, action items and keywords
2. Fireflies:get_transcript - full conversation (optional)

Order:
1. Have the meeting_id ready (from a search)
2. Fireflies:get_summary transcriptId="{meeting_id}"
3. (if needed) Fireflies:get_transcript transcriptId="{meeting_id}"

In the result:
- summary.action_items: action items
- summary.overview: meeting overview
- summary.keywords: key topics"#,
        params: &[ParamSpec::required("meeting_id", "Fireflies meeting ID")],
        render: templates::details_guide,
    },
    OperationDescriptor {
        name: TASK_CREATION_GUIDE,
        summary: "Turn action items into Asana tasks in a project.",
        description: r#"Asana task creation guide

Required MCP tools:
1. Asana:asana_typeahead_search - find the project
2. Asana:asana_create_task - create tasks

Order:
1. Find the project:
   Asana:asana_typeahead_search
   resource_type="project"
   query="project name"
   workspace_gid="{workspace_id}"

2. Create one task per action item:
   Asana:asana_create_task
   name="action item text"
   project_id="{project_gid}"
   notes="Assignee: XXX
Meeting: {meeting_title}"
   due_on="2024-11-01"

Tips:
- Parse the assignee out of each action item
- Priority can be set
- A section can be chosen"#,
        params: &[
            ParamSpec::optional("action_items", "Action item text taken from Fireflies"),
            ParamSpec::optional("project_name", "Asana project name"),
        ],
        render: templates::task_creation_guide,
    },
    OperationDescriptor {
        name: DOCUMENTATION_GUIDE,
        summary: "Save meeting notes as a page in a Notion database.",
        description: r##"Notion meeting notes guide

Required MCP tools:
1. Notion:notion-search - find the database
2. Notion:notion-create-pages - create the page

Order:
1. Find the database:
   Notion:notion-search
   query="Meeting notes" (or the database name)
   query_type="internal"

2. Create the page:
   Notion:notion-create-pages
   parent={data_source_id: "{db_id}"}
   pages=[{
     properties: {
       "Title": "Meeting title - date",
       "Date": "2024-10-24",
       "Attendees": "...",
     },
     content: "# Summary
...
# Action items
..."
   }]

Tips:
- Check the database schema first (fetch)
- Date properties use the date: prefix
- Write the content in Markdown"##,
        params: &[
            ParamSpec::optional("meeting_summary", "Meeting summary text"),
            ParamSpec::optional("database_name", "Notion database name"),
        ],
        render: templates::documentation_guide,
    },
    OperationDescriptor {
        name: FULL_WORKFLOW_GUIDE,
        summary: "Five-step run: search, details, Asana tasks, Notion page, report.",
        description: r#"Full workflow guide

End-to-end order:
━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Step 1: Search the meeting
→ Fireflies:search query="from:YYYY-MM-DD to:YYYY-MM-DD"
→ note the meeting_id

Step 2: Fetch the meeting content
→ Fireflies:get_summary transcriptId="{meeting_id}"
→ extract action_items, overview, keywords

Step 3: Create Asana tasks
→ Asana:asana_typeahead_search (find the project)
→ parse action items (assignee, due date)
→ Asana:asana_create_task (once per item)

Step 4: Document in Notion
→ Notion:notion-search (find the database)
→ Notion:notion-create-pages (write the notes)

Step 5: Report
→ number of tasks created
→ Notion page URL
→ action items grouped by assignee

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

Notes:
- Check the result of every step
- On failure retry only the failing step
- Resolve workspace_gid and database_id up front"#,
        params: &[
            ParamSpec::optional("meeting_date", "Meeting date (YYYY-MM-DD)"),
            ParamSpec::optional("asana_project", "Asana project name"),
            ParamSpec::optional("notion_database", "Notion database name"),
        ],
        render: templates::full_workflow_guide,
    },
    OperationDescriptor {
        name: QUICK_COMMANDS_GUIDE,
        summary: "Cheat sheet of common requests and the tool calls behind them.",
        description: r#"Quick command reference

📋 Find a meeting:
"Find the 10/24 meeting"
→ Fireflies:search query="from:2024-10-24 to:2024-10-24"

📊 Action items:
"Show the action items of this meeting"
→ Fireflies:get_summary transcriptId="{id}"

✅ Create tasks:
"Turn the action items into tasks in {project}"
→ Asana:asana_typeahead_search + asana_create_task

📝 Document:
"Save the notes to {database}"
→ Notion:notion-search + notion-create-pages

🚀 Full automation:
"Automate the 10/24 meeting end to end"
→ see full-workflow-guide

💡 Tips:
- workspace_gid: Asana:asana_list_workspaces
- database_id: Notion:notion-search
- assignee ID: Asana:asana_typeahead_search resource_type="user""#,
        params: &[],
        render: templates::quick_commands_guide,
    },
];

/// All operations in declaration order.
pub fn list_operations() -> &'static [OperationDescriptor] {
    CATALOG
}

pub fn find_operation(name: &str) -> Option<&'static OperationDescriptor> {
    CATALOG.iter().find(|op| op.name == name)
}

pub fn operation_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|op| op.name)
}
