//! Guide bodies.
//!
//! Single-brace placeholders such as `{workspace_id}` are literal text addressed to the agent
//! reading the guide; only the caller's arguments are substituted.

use crate::arguments::Arguments;

/// Characters kept from long free-text arguments.
pub const EXCERPT_CHARS: usize = 200;
pub const EXCERPT_MARKER: &str = "...";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// First [`EXCERPT_CHARS`] characters followed by [`EXCERPT_MARKER`].
///
/// The marker is appended even when nothing was cut; existing clients match on it.
pub fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(EXCERPT_CHARS).collect();
    out.push_str(EXCERPT_MARKER);
    out
}

pub(crate) fn search_guide(args: &Arguments) -> String {
    let query_hint = args.get("query_hint");
    format!(
        r#"
🔍 Meeting search guide

Search condition: {query_hint}

Use this tool:
{RULE}

Fireflies:search
query="{query_hint}"

Or a more specific query:
- Date: "from:2024-10-24 to:2024-10-24"
- Keyword: 'keyword:"project meeting"'
- Recent: "limit:20"

{RULE}

Note the meeting_id in the results and continue with the next step.
"#
    )
}

pub(crate) fn details_guide(args: &Arguments) -> String {
    let meeting_id = args.get("meeting_id");
    format!(
        r#"
📊 Meeting details guide

Meeting ID: {meeting_id}

1️⃣ Fetch the summary:
{RULE}

Fireflies:get_summary
transcriptId="{meeting_id}"

Check in the result:
✓ summary.action_items - action items
✓ summary.overview - meeting overview
✓ summary.keywords - key topics
✓ title - meeting title
✓ dateString - meeting date

{RULE}

2️⃣ (optional) Full conversation:

Fireflies:get_transcript
transcriptId="{meeting_id}"
"#
    )
}

pub(crate) fn task_creation_guide(args: &Arguments) -> String {
    let action_items = excerpt(args.get("action_items"));
    let project_name = args.get("project_name");
    format!(
        r#"
✅ Asana task creation guide

Project: {project_name}
Action items: {action_items}

Steps:
{RULE}

1️⃣ Look up the workspace ID:
Asana:asana_list_workspaces

2️⃣ Find the project:
Asana:asana_typeahead_search
resource_type="project"
query="{project_name}"
workspace_gid="{{workspace_id}}"

3️⃣ Create one task per action item:
Asana:asana_create_task
name="action item text"
project_id="{{project_gid}}"
notes="Assignee: XXX\nMeeting date: YYYY-MM-DD"
due_on="YYYY-MM-DD"

{RULE}

💡 Tips:
- Look for an "Assignee:" pattern in each action item
- Parse any dates mentioned
- Priority can be added
"#
    )
}

pub(crate) fn documentation_guide(args: &Arguments) -> String {
    let meeting_summary = excerpt(args.get("meeting_summary"));
    let database_name = args.get("database_name");
    format!(
        r##"
📝 Notion meeting notes guide

Database: {database_name}
Meeting summary: {meeting_summary}

Steps:
{RULE}

1️⃣ Find the database:
Notion:notion-search
query="{database_name}"
query_type="internal"

2️⃣ (important) Inspect the database schema:
Notion:notion-fetch
id="{{database_url}}"

→ confirm property names (title, date, attendees, ...)

3️⃣ Create the page:
Notion:notion-create-pages
parent={{
  data_source_id: "{{collection_id}}"
}}
pages=[{{
  properties: {{
    "Title": "Meeting name - date",
    "date:Date:start": "2024-10-24",
    "Attendees": "..."
  }},
  content: "# Summary\n...\n\n# Action items\n..."
}}]

{RULE}

💡 Notes:
- data_source_id comes from the collection:// URL
- Date properties use the date:{{property}}:start form
- content is Markdown
"##
    )
}

pub(crate) fn full_workflow_guide(args: &Arguments) -> String {
    let meeting_date = args.get("meeting_date");
    let asana_project = args.get("asana_project");
    let notion_database = args.get("notion_database");
    format!(
        r#"
🚀 Full workflow guide

Settings:
- Meeting date: {meeting_date}
- Asana project: {asana_project}
- Notion database: {notion_database}

{RULE}

📋 STEP 1: Search the meeting
Fireflies:search
query="from:{meeting_date} to:{meeting_date}"

→ keep the meeting_id

{RULE}

📊 STEP 2: Fetch the meeting content
Fireflies:get_summary
transcriptId="{{meeting_id}}"

→ keep action_items, overview, keywords

{RULE}

✅ STEP 3: Create Asana tasks

3-1. Workspace:
Asana:asana_list_workspaces

3-2. Find the project:
Asana:asana_typeahead_search
resource_type="project"
query="{asana_project}"
workspace_gid="{{workspace_id}}"

3-3. Parse action items and create tasks:
For each action item:
Asana:asana_create_task
name="[action item text]"
project_id="{{project_gid}}"
notes="Assignee: [extracted assignee]\nMeeting: {{meeting_title}}"
due_on="[due date]"

{RULE}

📝 STEP 4: Document in Notion

4-1. Find the database:
Notion:notion-search
query="{notion_database}"
query_type="internal"

4-2. Inspect the schema:
Notion:notion-fetch
id="{{database_url}}"

4-3. Create the page:
Notion:notion-create-pages
parent={{data_source_id: "{{collection_id}}"}}
pages=[{{
  properties: {{
    "[title property]": "{{meeting_title}} - {meeting_date}",
    "date:[date property]:start": "{meeting_date}"
  }},
  content: "
# Summary
{{overview}}

# Action items
{{action_items}}

# Key topics
{{keywords}}
"
}}]

{RULE}

📈 STEP 5: Report

Created:
✓ {{count}} Asana tasks
✓ 1 Notion page

Action items by assignee:
[group the action items by assignee]

{RULE}

Run each step in order!
"#
    )
}

pub(crate) fn quick_commands_guide(_args: &Arguments) -> String {
    QUICK_COMMANDS.to_string()
}

const QUICK_COMMANDS: &str = r#"
⚡ Quick command reference

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

🔍 Frequent searches:

"Find the 10/24 meeting"
→ Fireflies:search query="from:2024-10-24 to:2024-10-24"

"Show the last 10 meetings"
→ Fireflies:search query="limit:10"

"Search project meetings"
→ Fireflies:search query='keyword:"project"'

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

📊 Lookups:

"Summarize this meeting"
→ Fireflies:get_summary transcriptId="{id}"

"Show the action items"
→ summary.action_items of the result above

"Show the full conversation"
→ Fireflies:get_transcript transcriptId="{id}"

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

✅ Create tasks:

"Turn the action items into Asana tasks"
1. Asana:asana_list_workspaces
2. Asana:asana_typeahead_search (project)
3. Asana:asana_create_task (each item)

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

📝 Document:

"Save this to the meeting notes database"
1. Notion:notion-search query="Meeting notes"
2. Notion:notion-fetch (check the schema)
3. Notion:notion-create-pages

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

🚀 Full automation:

"Automate the 10/24 meeting end to end"
→ use the full-workflow-guide tool
→ run every step in order

━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

💡 Finding required IDs:

Workspace ID:
→ Asana:asana_list_workspaces

Database ID:
→ Notion:notion-search query="database name"

Assignee ID:
→ Asana:asana_typeahead_search
   resource_type="user"
   query="name"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_appends_marker_to_short_input() {
        assert_eq!(excerpt("x"), "x...");
        assert_eq!(excerpt(""), "...");
    }

    #[test]
    fn excerpt_keeps_first_two_hundred_chars() {
        let long = "a".repeat(250);
        let out = excerpt(&long);
        assert_eq!(out.len(), EXCERPT_CHARS + EXCERPT_MARKER.len());
        assert!(out.starts_with(&"a".repeat(EXCERPT_CHARS)));
        assert!(out.ends_with("a..."));
    }

    #[test]
    fn excerpt_counts_chars_not_bytes() {
        let long = "회".repeat(EXCERPT_CHARS + 5);
        let out = excerpt(&long);
        assert_eq!(out.chars().count(), EXCERPT_CHARS + EXCERPT_MARKER.len());
    }

    #[test]
    fn search_guide_echoes_hint_twice() {
        let args = Arguments::new().with("query_hint", "from:2024-10-24 to:2024-10-24");
        let text = search_guide(&args);
        assert!(text.contains("Search condition: from:2024-10-24 to:2024-10-24"));
        assert!(text.contains(r#"query="from:2024-10-24 to:2024-10-24""#));
    }

    #[test]
    fn details_guide_uses_id_in_both_lookups() {
        let args = Arguments::new().with("meeting_id", "01HXYZ");
        let text = details_guide(&args);
        assert_eq!(text.matches(r#"transcriptId="01HXYZ""#).count(), 2);
        assert!(text.contains("Fireflies:get_summary"));
        assert!(text.contains("Fireflies:get_transcript"));
    }

    #[test]
    fn task_creation_guide_truncates_items_and_keeps_placeholders() {
        let args = Arguments::new()
            .with("action_items", "b".repeat(300))
            .with("project_name", "Launch");
        let text = task_creation_guide(&args);
        assert!(text.contains(&format!("Action items: {}...\n", "b".repeat(200))));
        assert!(!text.contains(&"b".repeat(201)));
        assert!(text.contains(r#"query="Launch""#));
        assert!(text.contains(r#"workspace_gid="{workspace_id}""#));
        assert!(text.contains(r#"project_id="{project_gid}""#));
    }

    #[test]
    fn documentation_guide_truncates_summary_only() {
        let args = Arguments::new()
            .with("meeting_summary", "short")
            .with("database_name", "d".repeat(250));
        let text = documentation_guide(&args);
        assert!(text.contains("Meeting summary: short..."));
        assert!(text.contains(&format!("Database: {}\n", "d".repeat(250))));
        assert!(text.contains("date:{property}:start"));
    }

    #[test]
    fn documentation_guide_keeps_markdown_content_skeleton() {
        let text = documentation_guide(&Arguments::new());
        assert!(text.contains(r##"content: "# Summary\n...\n\n# Action items\n...""##));
        assert!(text.contains(r#""Title": "Meeting name - date","#));
        assert!(text.trim_end().ends_with("- content is Markdown"));
    }

    #[test]
    fn full_workflow_guide_embeds_all_settings_verbatim() {
        let args = Arguments::new()
            .with("meeting_date", "2024-10-24")
            .with("asana_project", "Roadmap")
            .with("notion_database", "Meeting notes");
        let text = full_workflow_guide(&args);
        assert!(text.contains(r#"query="from:2024-10-24 to:2024-10-24""#));
        assert!(text.contains(r#"query="Roadmap""#));
        assert!(text.contains(r#"query="Meeting notes""#));
        assert!(text.contains(r#""{meeting_title} - 2024-10-24""#));
        for step in 1..=5 {
            assert!(text.contains(&format!("STEP {step}:")), "missing step {step}");
        }
        assert!(!text.contains("..."), "no truncation in the workflow guide");
    }

    #[test]
    fn quick_commands_ignore_arguments() {
        let with_args = quick_commands_guide(&Arguments::new().with("query_hint", "ignored"));
        assert_eq!(with_args, quick_commands_guide(&Arguments::new()));
        assert!(!with_args.contains("ignored"));
    }
}
