//! Literal text blocks matched against the target file.
//!
//! Matching is exact, byte for byte, including indentation and line endings.

/// Path patched when no target is given on the command line.
pub const DEFAULT_TARGET: &str = "api_server.py";

pub const UPDATED_SUFFIX: &str = ".updated";
pub const BACKUP_SUFFIX: &str = ".backup";

pub const OLD_QUERY: &str = concat!(
    "cursor.execute(\"\"\"\n",
    "            SELECT rt.*, a.title as article_original_title, a.url as original_url\n",
    "            FROM ready_texts rt\n",
    "            LEFT JOIN articles a ON rt.original_article_id = a.id\n",
    "            WHERE rt.id = ?\n",
    "        \"\"\", (ready_text_id,))",
);

pub const NEW_QUERY: &str = concat!(
    "cursor.execute(\"\"\"\n",
    "            SELECT rt.*, a.title as article_original_title, a.url as original_url, \n",
    "                   rt.project_id, p.name as project_name\n",
    "            FROM ready_texts rt\n",
    "            LEFT JOIN articles a ON rt.original_article_id = a.id\n",
    "            LEFT JOIN projects p ON rt.project_id = p.id\n",
    "            WHERE rt.id = ?\n",
    "        \"\"\", (ready_text_id,))",
);

/// Same query as [`OLD_QUERY`] saved with CRLF line endings.
pub const OLD_QUERY_ALT: &str = concat!(
    "cursor.execute(\"\"\"\r\n",
    "            SELECT rt.*, a.title as article_original_title, a.url as original_url\r\n",
    "            FROM ready_texts rt\r\n",
    "            LEFT JOIN articles a ON rt.original_article_id = a.id\r\n",
    "            WHERE rt.id = ?\r\n",
    "        \"\"\", (ready_text_id,))",
);

pub const NEW_QUERY_ALT: &str = concat!(
    "cursor.execute(\"\"\"\r\n",
    "            SELECT rt.*, a.title as article_original_title, a.url as original_url, \r\n",
    "                   rt.project_id, p.name as project_name\r\n",
    "            FROM ready_texts rt\r\n",
    "            LEFT JOIN articles a ON rt.original_article_id = a.id\r\n",
    "            LEFT JOIN projects p ON rt.project_id = p.id\r\n",
    "            WHERE rt.id = ?\r\n",
    "        \"\"\", (ready_text_id,))",
);

pub const OLD_PAYLOAD: &str = concat!(
    "payload = {\n",
    "            \"title\": article_title,\n",
    "            \"content\": article_content,\n",
    "            \"images\": images,\n",
    "            \"source_project\": \"smi_main\",\n",
    "            \"original_id\": ready_text_id,\n",
    "            \"platform\": article['platform'] or \"WordPress\",\n",
    "            \"original_url\": article['original_url'],\n",
    "            \"arrival_token\": arrival_token  # Добавляем токен для отслеживания\n",
    "        }",
);

pub const NEW_PAYLOAD: &str = concat!(
    "# Получаем project_id и project_name из article\n",
    "        project_id = article.get('project_id')\n",
    "        project_name = article.get('project_name', 'Unknown Project')\n",
    "        \n",
    "        backend_logger.info(f\"📦 Article project: ID={project_id}, Name={project_name}\")\n",
    "        \n",
    "        payload = {\n",
    "            \"title\": article_title,\n",
    "            \"content\": article_content,\n",
    "            \"images\": images,\n",
    "            \"source_project\": \"smi_main\",\n",
    "            \"original_id\": ready_text_id,\n",
    "            \"platform\": article['platform'] or \"WordPress\",\n",
    "            \"original_url\": article['original_url'],\n",
    "            \"arrival_token\": arrival_token,  # Добавляем токен для отслеживания\n",
    "            \"project_id\": project_id,  # ID проекта в SMI\n",
    "            \"project_name\": project_name  # Название проекта\n",
    "        }",
);
