//! Bundled builtin functions, grouped by the PHP manual's extension names.

pub(super) static MODULES: &[(&str, &[&str])] = &[
    (
        "Arrays",
        &[
            "array_change_key_case", "array_chunk", "array_column", "array_combine",
            "array_count_values", "array_diff", "array_diff_assoc", "array_diff_key",
            "array_diff_uassoc", "array_diff_ukey", "array_fill", "array_fill_keys",
            "array_filter", "array_flip", "array_intersect", "array_intersect_assoc",
            "array_intersect_key", "array_intersect_uassoc", "array_intersect_ukey",
            "array_is_list", "array_key_exists", "array_key_first", "array_key_last",
            "array_keys", "array_map", "array_merge", "array_merge_recursive",
            "array_multisort", "array_pad", "array_pop", "array_product", "array_push",
            "array_rand", "array_reduce", "array_replace", "array_replace_recursive",
            "array_reverse", "array_search", "array_shift", "array_slice", "array_splice",
            "array_sum", "array_udiff", "array_udiff_assoc", "array_udiff_uassoc",
            "array_uintersect", "array_uintersect_assoc", "array_uintersect_uassoc",
            "array_unique", "array_unshift", "array_values", "array_walk",
            "array_walk_recursive", "arsort", "asort", "compact", "count", "current", "end",
            "extract", "in_array", "key", "key_exists", "krsort", "ksort", "natcasesort",
            "natsort", "next", "pos", "prev", "range", "reset", "rsort", "shuffle", "sizeof",
            "sort", "uasort", "uksort", "usort", "each",
        ],
    ),
    (
        "Strings",
        &[
            "addcslashes", "addslashes", "bin2hex", "chop", "chr", "chunk_split",
            "convert_uudecode", "convert_uuencode", "count_chars", "crc32", "crypt",
            "explode", "fprintf", "get_html_translation_table", "hebrev", "hex2bin",
            "html_entity_decode", "htmlentities", "htmlspecialchars",
            "htmlspecialchars_decode", "implode", "join", "lcfirst", "levenshtein",
            "localeconv", "ltrim", "md5", "md5_file", "metaphone", "money_format",
            "nl_langinfo", "nl2br", "number_format", "ord", "parse_str", "printf",
            "quoted_printable_decode", "quoted_printable_encode", "quotemeta", "rtrim",
            "setlocale", "sha1", "sha1_file", "similar_text", "soundex", "sprintf",
            "sscanf", "str_contains", "str_ends_with", "str_getcsv", "str_ireplace",
            "str_pad", "str_repeat", "str_replace", "str_rot13", "str_shuffle", "str_split",
            "str_starts_with", "str_word_count", "strcasecmp", "strchr", "strcmp",
            "strcoll", "strcspn", "strip_tags", "stripcslashes", "stripos", "stripslashes",
            "stristr", "strlen", "strnatcasecmp", "strnatcmp", "strncasecmp", "strncmp",
            "strpbrk", "strpos", "strrchr", "strrev", "strripos", "strrpos", "strspn",
            "strstr", "strtok", "strtolower", "strtoupper", "strtr", "substr",
            "substr_compare", "substr_count", "substr_replace", "trim", "ucfirst",
            "ucwords", "vfprintf", "vprintf", "vsprintf", "wordwrap",
        ],
    ),
    (
        "Math",
        &[
            "abs", "acos", "acosh", "asin", "asinh", "atan", "atan2", "atanh",
            "base_convert", "bindec", "ceil", "cos", "cosh", "decbin", "dechex", "decoct",
            "deg2rad", "exp", "expm1", "fdiv", "floor", "fmod", "hexdec", "hypot",
            "intdiv", "is_finite", "is_infinite", "is_nan", "log", "log10", "log1p",
            "log2", "max", "min", "octdec", "pi", "pow", "rad2deg", "round", "sin", "sinh",
            "sqrt", "tan", "tanh",
        ],
    ),
    (
        "Random",
        &[
            "getrandmax", "lcg_value", "mt_getrandmax", "mt_rand", "mt_srand", "rand",
            "random_bytes", "random_int", "srand",
        ],
    ),
    (
        "Variable handling",
        &[
            "boolval", "debug_zval_refcount", "debug_zval_dump", "doubleval", "empty",
            "floatval", "get_debug_type", "get_defined_vars", "get_resource_id",
            "get_resource_type", "gettype", "intval", "is_array", "is_bool",
            "is_callable", "is_countable", "is_double", "is_float", "is_int",
            "is_integer", "is_iterable", "is_long", "is_null", "is_numeric", "is_object",
            "is_resource", "is_scalar", "is_string", "isset", "print_r", "serialize",
            "settype", "strval", "unserialize", "unset", "var_dump", "var_export",
        ],
    ),
    (
        "Function handling",
        &[
            "call_user_func", "call_user_func_array", "func_get_arg", "func_get_args",
            "func_num_args", "function_exists", "get_defined_functions",
            "register_shutdown_function", "register_tick_function",
            "forward_static_call", "forward_static_call_array",
            "unregister_tick_function",
        ],
    ),
    (
        "Classes/Objects",
        &[
            "class_exists", "enum_exists", "get_called_class", "get_class",
            "get_class_methods", "get_class_vars", "get_mangled_object_vars",
            "get_object_vars", "get_parent_class", "interface_exists", "is_a",
            "is_subclass_of", "method_exists", "property_exists", "trait_exists",
            "class_implements", "class_parents", "class_uses", "spl_autoload_register",
            "spl_object_hash", "spl_object_id",
        ],
    ),
    (
        "JSON",
        &["json_decode", "json_encode", "json_last_error", "json_last_error_msg", "json_validate"],
    ),
    (
        "PCRE",
        &[
            "preg_grep", "preg_last_error", "preg_last_error_msg", "preg_match",
            "preg_match_all", "preg_quote", "preg_replace", "preg_replace_callback",
            "preg_replace_callback_array", "preg_split", "preg_filter",
        ],
    ),
    (
        "Multibyte String",
        &[
            "mb_check_encoding", "mb_convert_case", "mb_convert_encoding",
            "mb_detect_encoding", "mb_internal_encoding", "mb_str_pad", "mb_str_split",
            "mb_strimwidth", "mb_stripos", "mb_stristr", "mb_strlen", "mb_strpos",
            "mb_strrchr", "mb_strrpos", "mb_strstr", "mb_strtolower", "mb_strtoupper",
            "mb_strwidth", "mb_substr", "mb_substr_count",
        ],
    ),
    (
        "Filesystem",
        &[
            "basename", "chgrp", "chmod", "chown", "clearstatcache", "copy", "dirname",
            "disk_free_space", "disk_total_space", "fclose", "feof", "fflush", "fgetc",
            "fgetcsv", "fgets", "file", "file_exists", "file_get_contents",
            "file_put_contents", "fileatime", "filemtime", "fileperms", "filesize",
            "filetype", "flock", "fnmatch", "fopen", "fpassthru", "fputcsv", "fputs",
            "fread", "fscanf", "fseek", "fstat", "ftell", "ftruncate", "fwrite", "glob",
            "is_dir", "is_executable", "is_file", "is_link", "is_readable",
            "is_uploaded_file", "is_writable", "is_writeable", "lchown", "link", "lstat",
            "mkdir", "move_uploaded_file", "parse_ini_file", "parse_ini_string",
            "pathinfo", "pclose", "popen", "readfile", "readlink", "realpath", "rename",
            "rewind", "rmdir", "stat", "symlink", "tempnam", "tmpfile", "touch", "umask",
            "unlink",
        ],
    ),
    (
        "Directories",
        &[
            "chdir", "chroot", "closedir", "dir", "getcwd", "opendir", "readdir",
            "rewinddir", "scandir",
        ],
    ),
    (
        "Date/Time",
        &[
            "checkdate", "date", "date_add", "date_create", "date_create_immutable",
            "date_default_timezone_get", "date_default_timezone_set", "date_diff",
            "date_format", "date_parse", "date_sub", "date_sun_info", "getdate",
            "gettimeofday", "gmdate", "gmmktime", "gmstrftime", "hrtime", "idate",
            "localtime", "microtime", "mktime", "strftime", "strtotime", "time",
            "timezone_identifiers_list", "timezone_open",
        ],
    ),
    (
        "URLs",
        &[
            "base64_decode", "base64_encode", "get_headers", "get_meta_tags",
            "http_build_query", "parse_url", "rawurldecode", "rawurlencode", "urldecode",
            "urlencode",
        ],
    ),
    (
        "Network",
        &[
            "checkdnsrr", "dns_get_record", "fsockopen", "gethostbyaddr", "gethostbyname",
            "gethostname", "getmxrr", "header", "header_remove", "headers_list",
            "headers_sent", "http_response_code", "inet_ntop", "inet_pton", "ip2long",
            "long2ip", "setcookie", "setrawcookie",
        ],
    ),
    (
        "Output Control",
        &[
            "flush", "ob_clean", "ob_end_clean", "ob_end_flush", "ob_flush", "ob_get_clean",
            "ob_get_contents", "ob_get_flush", "ob_get_length", "ob_get_level",
            "ob_get_status", "ob_implicit_flush", "ob_list_handlers", "ob_start",
            "output_add_rewrite_var", "output_reset_rewrite_vars",
        ],
    ),
    (
        "Error Handling",
        &[
            "debug_backtrace", "debug_print_backtrace", "error_clear_last", "error_get_last",
            "error_log", "error_reporting", "restore_error_handler",
            "restore_exception_handler", "set_error_handler", "set_exception_handler",
            "trigger_error", "user_error",
        ],
    ),
    (
        "Session",
        &[
            "session_abort", "session_cache_expire", "session_cache_limiter",
            "session_commit", "session_create_id", "session_decode", "session_destroy",
            "session_encode", "session_gc", "session_get_cookie_params", "session_id",
            "session_name", "session_regenerate_id", "session_reset", "session_save_path",
            "session_set_cookie_params", "session_start", "session_status",
            "session_unset", "session_write_close",
        ],
    ),
    (
        "Ctype",
        &[
            "ctype_alnum", "ctype_alpha", "ctype_cntrl", "ctype_digit", "ctype_graph",
            "ctype_lower", "ctype_print", "ctype_punct", "ctype_space", "ctype_upper",
            "ctype_xdigit",
        ],
    ),
    (
        "Hash",
        &[
            "hash", "hash_algos", "hash_copy", "hash_equals", "hash_file", "hash_final",
            "hash_hkdf", "hash_hmac", "hash_hmac_algos", "hash_init", "hash_pbkdf2",
            "hash_update",
        ],
    ),
    (
        "Password Hashing",
        &[
            "password_algos", "password_get_info", "password_hash", "password_needs_rehash",
            "password_verify",
        ],
    ),
    (
        "Program execution",
        &[
            "escapeshellarg", "escapeshellcmd", "exec", "passthru", "proc_close",
            "proc_get_status", "proc_nice", "proc_open", "proc_terminate", "shell_exec",
            "system",
        ],
    ),
    (
        "PHP Options/Info",
        &[
            "assert", "assert_options", "extension_loaded", "gc_collect_cycles",
            "gc_disable", "gc_enable", "get_cfg_var", "get_include_path",
            "get_included_files", "getenv", "getmypid", "ini_get", "ini_restore",
            "ini_set", "memory_get_peak_usage", "memory_get_usage", "php_ini_loaded_file",
            "php_sapi_name", "php_uname", "phpinfo", "phpversion", "putenv",
            "set_include_path", "set_time_limit", "sys_get_temp_dir", "version_compare",
            "zend_version",
        ],
    ),
    (
        "Misc.",
        &[
            "connection_aborted", "connection_status", "constant", "define", "defined",
            "highlight_file", "highlight_string", "ignore_user_abort", "pack",
            "php_strip_whitespace", "sleep", "sys_getloadavg", "time_nanosleep",
            "uniqid", "unpack", "usleep",
        ],
    ),
    (
        "cURL",
        &[
            "curl_close", "curl_copy_handle", "curl_errno", "curl_error", "curl_escape",
            "curl_exec", "curl_getinfo", "curl_init", "curl_multi_add_handle",
            "curl_multi_close", "curl_multi_exec", "curl_multi_init", "curl_reset",
            "curl_setopt", "curl_setopt_array", "curl_unescape", "curl_version",
        ],
    ),
    (
        "MySQLi",
        &[
            "mysqli_affected_rows", "mysqli_close", "mysqli_connect", "mysqli_connect_errno",
            "mysqli_connect_error", "mysqli_errno", "mysqli_error", "mysqli_fetch_all",
            "mysqli_fetch_array", "mysqli_fetch_assoc", "mysqli_fetch_object",
            "mysqli_fetch_row", "mysqli_free_result", "mysqli_insert_id",
            "mysqli_num_rows", "mysqli_prepare", "mysqli_query",
            "mysqli_real_escape_string", "mysqli_select_db", "mysqli_stmt_bind_param",
            "mysqli_stmt_execute",
        ],
    ),
];
