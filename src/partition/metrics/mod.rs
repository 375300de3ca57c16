mod electoral;
