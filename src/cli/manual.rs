//! Static help text for `seek`, `seek --help`, and `seek man`.

pub const SHORT_MANUAL: &str = "\
SEEK - DEEPSEEK CHAT FROM THE COMMAND LINE

Usage:
  seek -i \"your prompt\" [options]
  seek config [options]
  seek chat

Commands:
  config          Store your API key and generation preferences
  chat            Interactive chat session
  man             Show the extended manual

Query options:
  -i, --input     Prompt to send (required)
  -t, --terminal  Print the reply in the terminal
  -o, --output    Save the reply to file(s)
  -n, --name      Base name for output files
      --model     Use a different model for this query

Output formats (require -o):
  -m, --markdown  Save the reply as <name>.md
  -f, --file      Save the reply as <name>.txt
  -c, --code      Extract fenced code blocks to <name>_<n>.<ext>

Compression (require -o):
  -gz, --gz       Move the saved files into <name>.tar.gz
  -z, --zip       Move the saved files into <name>.zip

Help:
  -h, --help      Show this message
  man             Show the extended manual

Examples:
  seek -i \"Explain Python decorators\" -t
  seek -i \"REST API example in Flask\" -o -m -c -n my_api
  seek config --api-key YOUR_KEY --model deepseek-coder";

pub const EXTENDED_MANUAL: &str = "\
SEEK - EXTENDED MANUAL

CONFIGURATION:
  Settings are stored in ~/.deepseek/seek.json (override with SEEK_CONFIG).
    1. seek config --api-key YOUR_KEY
    2. Optionally choose a model and parameters:
       seek config --model deepseek-coder --temperature 0.5

  Typical contents:
    {
      \"api_key\": \"YOUR_KEY\",
      \"default_model\": \"deepseek-chat\",
      \"temperature\": 0.7,
      \"max_tokens\": 2000
    }

  When no key is stored, DEEPSEEK_API_KEY is used instead.
  An optional \"base_url\" points the client at another compatible endpoint.

MODELS:
  - deepseek-chat (default)
  - deepseek-coder
  - deepseek-reasoner

OUTPUT:
  - File names default to seek_output_YYYYMMDD_HHMMSS
  - Use -n to choose the base name
  - Code blocks are numbered by their position in the reply and named
    after their language tag (16 languages; unknown tags use .txt)
  - Existing files with the same name are overwritten

COMPRESSION:
  - -gz and -z remove the loose files once they are archived
  - Both may be given together; each archive gets every saved file

INTERACTIVE MODE:
  Start with 'seek chat'. Directives:
    /save [file]  Save the conversation
    /reset        Start over
    /help         List directives
    /exit         Quit
  Ctrl-C does not quit; use /exit.

DIAGNOSTICS:
  Set SEEK_LOG (e.g. SEEK_LOG=seek=debug) or pass -v to see request and
  file-handling details on stderr.

ADVANCED EXAMPLES:
  1. One-off model override:
     seek -i \"Optimize this Python code\" --model deepseek-coder -t
  2. Technical documentation:
     seek -i \"Write Markdown docs for a REST API\" -o -m -n docs
  3. Full project, zipped:
     seek -i \"CRUD app in Flask with MongoDB\" -o -m -c -z";
