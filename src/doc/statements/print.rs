/*!
# `PRINT "text"` or `PRINT <variable>`

## Purpose
Write text or the value of a variable to the screen at the cursor.

## Remarks
The cursor moves right one column for each character and wraps to the
next row after column 40. The screen does not scroll.

Each character costs a little over thirty instructions, so keep
messages short.

## Example
```text
print "Hi"
print score
```

*/
