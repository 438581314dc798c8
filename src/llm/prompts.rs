/// Marker in [`COMMIT_MESSAGE`] replaced with the staged diff.
pub const STAGED_CHANGES_PLACEHOLDER: &str = "{{STAGED_CHANGES}}";

pub const OPEN_TAG: &str = "<commit_message>";
pub const CLOSE_TAG: &str = "</commit_message>";

pub const COMMIT_MESSAGE: &str = r#"
You are tasked with generating a conventional commit message based on staged changes in a Git repository. The staged changes will be provided to you, and you should analyze them to create an appropriate commit message.

First, here are the staged changes:

<staged_changes>
{{STAGED_CHANGES}}
</staged_changes>

The conventional commit format follows this structure:
<type>[optional scope]: <description>

[optional body]

[optional footer(s)]

Where:
- type: describes the kind of change (e.g., feat, fix, docs, style, refactor, test, chore)
- scope: (optional) describes what is affected by the change
- description: a short, imperative mood description of the change
- body: (optional) provides additional contextual information about the change
- footer: (optional) contains any breaking changes or references to issues

Analyze the staged changes provided above. Determine the most appropriate commit type based on the nature of the changes. The most common types are:

- feat: A new feature
- fix: A bug fix
- docs: Documentation only changes
- style: Changes that do not affect the meaning of the code (white-space, formatting, etc.)
- refactor: A code change that neither fixes a bug nor adds a feature
- test: Adding missing tests or correcting existing tests
- chore: Changes to the build process or auxiliary tools and libraries

Create a concise description that summarizes the main purpose of the changes. If there are multiple significant changes, focus on the most important one or use a general description that encompasses all changes.

If there are multiple unrelated changes, it's generally better to create separate commits. However, for this task, create a single commit message that best represents the overall changes.

Format your commit message according to the conventional commit structure. Include a scope if it's clear what specific part of the codebase is affected. Only include a body if there's crucial additional context that can't be conveyed in the short description.

Output your generated commit message within <commit_message> tags. Do not include any explanation or reasoning outside of these tags.

<commit_message>
[Your generated conventional commit message goes here]
</commit_message>
"#;
